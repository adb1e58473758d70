//! Scenario-change detection — the explicit command model behind insight
//! generation.
//!
//! A change command carries the full before/after snapshot plus a
//! human-readable description of what moved. Whether a change is worth an
//! insight is a pure function of the two snapshots; no UI state container
//! is involved.

use crate::{metrics::ScenarioMetrics, scenario::Scenario};
use serde::{Deserialize, Serialize};

/// Relative move in revenue or expenses that triggers an insight.
/// Strictly greater than this fires; exactly 10% does not.
pub const CHANGE_THRESHOLD: f64 = 0.10;

/// The metric triple the insight collaborator sees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub revenue: f64,
    pub expenses: f64,
    /// Whole months, floored, as the dashboard shows it. 0 when runway
    /// is undefined.
    pub runway_months: i64,
}

impl MetricSnapshot {
    pub fn new(revenue: f64, expenses: f64, runway_months: i64) -> Self {
        Self {
            revenue,
            expenses,
            runway_months,
        }
    }

    pub fn for_scenario(scenario: &Scenario) -> Self {
        let metrics = ScenarioMetrics::for_scenario(scenario);
        Self {
            revenue: scenario.revenue,
            expenses: scenario.expenses,
            runway_months: metrics.runway.map_or(0, |months| months.floor() as i64),
        }
    }
}

/// An applied scenario change, ready to be described by the insight
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioChange {
    pub before: MetricSnapshot,
    pub after: MetricSnapshot,
    pub action: String,
}

/// Compare two snapshots; emit a change command when revenue or expenses
/// moved by more than [`CHANGE_THRESHOLD`] relative to the previous value.
/// The action text describes whichever moved further.
pub fn detect_change(prev: &MetricSnapshot, next: &MetricSnapshot) -> Option<ScenarioChange> {
    let revenue_change = relative_change(prev.revenue, next.revenue);
    let expenses_change = relative_change(prev.expenses, next.expenses);

    if revenue_change <= CHANGE_THRESHOLD && expenses_change <= CHANGE_THRESHOLD {
        return None;
    }

    let action = if revenue_change > expenses_change {
        let verb = if next.revenue > prev.revenue {
            "Increased"
        } else {
            "Decreased"
        };
        format!("{verb} revenue by {:.1}%", revenue_change * 100.0)
    } else {
        let verb = if next.expenses > prev.expenses {
            "Increased"
        } else {
            "Decreased"
        };
        format!("{verb} expenses by {:.1}%", expenses_change * 100.0)
    };

    Some(ScenarioChange {
        before: *prev,
        after: *next,
        action,
    })
}

/// Absolute relative move from `prev` to `next`. A move away from zero
/// counts as infinitely large so it always triggers.
fn relative_change(prev: f64, next: f64) -> f64 {
    if prev == 0.0 {
        if next == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        ((next - prev) / prev).abs()
    }
}
