//! Insight prompt construction — the seam to the hosted language model.
//!
//! The engine renders prompts and hands them to an [`InsightBackend`];
//! it never parses or validates the returned text. The four modes form a
//! closed set: adding one is a compile-time event, not a runtime
//! default-case fallback.

use crate::{
    command::{MetricSnapshot, ScenarioChange},
    error::{PlanError, PlanResult},
    format,
};
use serde::{Deserialize, Serialize};

/// One prompt request, with exactly the fields its mode needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum InsightRequest {
    /// 1–2 sentence summary of what a change does.
    Insight {
        before: MetricSnapshot,
        after: MetricSnapshot,
        action: String,
    },
    /// Short 2–3 word name for the strategy behind a change.
    Naming {
        before: MetricSnapshot,
        after: MetricSnapshot,
        action: String,
    },
    /// Executive-summary paragraph for the PDF report.
    Report {
        before: MetricSnapshot,
        after: MetricSnapshot,
        action: String,
    },
    /// 0–100 health score with one concise explanation.
    Health {
        current: MetricSnapshot,
        action: String,
    },
}

impl InsightRequest {
    /// The default mode for a detected scenario change.
    pub fn from_change(change: ScenarioChange) -> Self {
        Self::Insight {
            before: change.before,
            after: change.after,
            action: change.action,
        }
    }

    /// Stable mode tag, used for usage-event metadata.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Insight { .. } => "insight",
            Self::Naming { .. } => "naming",
            Self::Report { .. } => "report",
            Self::Health { .. } => "health",
        }
    }

    /// Render the full prompt text for this request.
    pub fn render_prompt(&self) -> String {
        match self {
            Self::Insight {
                before,
                after,
                action,
            } => format!(
                "Summarize in 1–2 sentences what this financial change does for an \
                 Indian business. Be clear and business-like. Use Indian business \
                 terminology.\n\n\
                 Before: {}\n\
                 After: {}\n\
                 Action: {action}",
                snapshot_line(before),
                snapshot_line(after),
            ),
            Self::Naming {
                before,
                after,
                action,
            } => format!(
                "Suggest a short 2–3 word name for this Indian business financial \
                 strategy.\n\n\
                 Revenue change: {} → {}\n\
                 Expenses change: {} → {}\n\
                 Runway change: {} → {} months\n\
                 Action: {action}",
                format::format_currency(before.revenue),
                format::format_currency(after.revenue),
                format::format_currency(before.expenses),
                format::format_currency(after.expenses),
                before.runway_months,
                after.runway_months,
            ),
            Self::Report {
                before,
                after,
                action,
            } => format!(
                "Write an executive summary paragraph for this Indian business \
                 financial scenario that could appear in a PDF report. Use Indian \
                 business terminology and context.\n\n\
                 Before: {}\n\
                 After: {}\n\
                 Action: {action}",
                snapshot_line(before),
                snapshot_line(after),
            ),
            Self::Health { current, action } => format!(
                "On a scale of 0–100, rate the financial health of this Indian \
                 company based on profitability, runway, and spending discipline. \
                 Consider Indian market conditions. Respond with the number and one \
                 concise explanation.\n\n\
                 Current metrics: {}\n\
                 Recent change: {action}",
                snapshot_line(current),
            ),
        }
    }
}

fn snapshot_line(snapshot: &MetricSnapshot) -> String {
    format!(
        "Revenue: {}, Expenses: {}, Runway: {} months",
        format::format_currency(snapshot.revenue),
        format::format_currency(snapshot.expenses),
        snapshot.runway_months,
    )
}

/// External collaborator seam. Implementations own transport and auth;
/// the planner passes prompts through and returns the text untouched —
/// no retry, no fallback, no partial-result synthesis.
pub trait InsightBackend: Send {
    fn generate(&self, request: &InsightRequest) -> PlanResult<String>;
}

/// Backend used when no generative API is configured.
pub struct DisabledBackend;

impl InsightBackend for DisabledBackend {
    fn generate(&self, _request: &InsightRequest) -> PlanResult<String> {
        Err(PlanError::InsightUnavailable {
            reason: "no insight backend configured".into(),
        })
    }
}
