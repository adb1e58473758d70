//! Health classification policies.
//!
//! Two rules ship side by side and are NOT equivalent: the runway gauge
//! uses inclusive band edges, the scenario-list badge requires strictly
//! better than its thresholds on both axes. They stay distinct, named
//! policies; unifying them is a product decision.

use crate::metrics::ScenarioMetrics;
use serde::{Deserialize, Serialize};

/// Runway-only policy, used for the runway gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunwayBand {
    Healthy,
    Caution,
    Critical,
}

impl RunwayBand {
    /// months ≥ 18 → Healthy; 12 ≤ months < 18 → Caution; else Critical.
    pub fn classify(months: f64) -> Self {
        if months >= 18.0 {
            Self::Healthy
        } else if months >= 12.0 {
            Self::Caution
        } else {
            Self::Critical
        }
    }

    /// An undefined runway cannot be vouched for: Critical.
    pub fn for_metrics(metrics: &ScenarioMetrics) -> Self {
        metrics.runway.map_or(Self::Critical, Self::classify)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Caution => "Caution",
            Self::Critical => "Critical",
        }
    }
}

/// Combined margin-and-runway policy, used for scenario-list risk badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBadge {
    Healthy,
    Moderate,
    Risk,
}

impl RiskBadge {
    /// Strict `>` on every threshold: margin 20.0 with runway 18.0 is
    /// NOT Healthy. The asymmetry with [`RunwayBand`] is intentional.
    pub fn classify(profit_margin: f64, runway: f64) -> Self {
        if profit_margin > 20.0 && runway > 18.0 {
            Self::Healthy
        } else if profit_margin > 10.0 && runway > 12.0 {
            Self::Moderate
        } else {
            Self::Risk
        }
    }

    /// An undefined margin or runway classifies as Risk.
    pub fn for_metrics(metrics: &ScenarioMetrics) -> Self {
        match (metrics.profit_margin, metrics.runway) {
            (Some(margin), Some(runway)) => Self::classify(margin, runway),
            _ => Self::Risk,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Moderate => "Moderate",
            Self::Risk => "Risk",
        }
    }
}
