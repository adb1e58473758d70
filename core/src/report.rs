//! Report payload assembly for the PDF-rendering collaborator.

use crate::{
    metrics::ScenarioMetrics,
    projection::{project, ProjectionPoint},
    scenario::Scenario,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    #[default]
    Full,
    Summary,
}

impl ReportType {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Summary => "summary",
        }
    }
}

/// Metrics as they appear on a report: margin to 2 decimals, runway and
/// break-even to 1, profit in whole rupees. This rounding policy belongs
/// to reports alone — the dashboard contexts round differently on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportMetrics {
    pub profit_margin: Option<f64>,
    pub monthly_profit: i64,
    pub runway: Option<f64>,
    pub break_even_point: Option<f64>,
}

impl ReportMetrics {
    pub fn from_metrics(metrics: &ScenarioMetrics) -> Self {
        Self {
            profit_margin: metrics.profit_margin.map(|v| round_dp(v, 2)),
            monthly_profit: metrics.monthly_profit.round() as i64,
            runway: metrics.runway.map(|v| round_dp(v, 1)),
            break_even_point: metrics.break_even_point.map(|v| round_dp(v, 1)),
        }
    }
}

fn round_dp(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// The payload handed to the PDF renderer. Projections are recomputed on
/// every request and never persisted independently of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub scenario: Scenario,
    pub metrics: ReportMetrics,
    pub projections: Vec<ProjectionPoint>,
    pub generated_at: DateTime<Utc>,
    pub report_type: ReportType,
}

pub fn build_report(
    scenario: &Scenario,
    report_type: ReportType,
    generated_at: DateTime<Utc>,
) -> Report {
    let metrics = ScenarioMetrics::for_scenario(scenario);
    Report {
        scenario: scenario.clone(),
        metrics: ReportMetrics::from_metrics(&metrics),
        projections: project(scenario),
        generated_at,
        report_type,
    }
}
