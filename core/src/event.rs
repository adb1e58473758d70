//! Usage events — the append-only analytics log.
//!
//! RULE: the planner only ever writes events; analytics reads them back.
//! The stable string tag is the contract with downstream aggregation —
//! variants are added as features land, never removed or renamed.

use crate::types::{EventId, ScenarioId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every action the planner records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageAction {
    ScenarioCreated,
    ScenarioUpdated,
    ScenarioDeleted,
    ReportGenerated,
    InsightRequested,
}

impl UsageAction {
    /// Stable string tag used for the `action` column.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ScenarioCreated => "scenario_created",
            Self::ScenarioUpdated => "scenario_updated",
            Self::ScenarioDeleted => "scenario_deleted",
            Self::ReportGenerated => "report_generated",
            Self::InsightRequested => "insight_requested",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "scenario_created" => Some(Self::ScenarioCreated),
            "scenario_updated" => Some(Self::ScenarioUpdated),
            "scenario_deleted" => Some(Self::ScenarioDeleted),
            "report_generated" => Some(Self::ReportGenerated),
            "insight_requested" => Some(Self::InsightRequested),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEvent {
    pub id: EventId,
    pub action: UsageAction,
    pub scenario_id: Option<ScenarioId>,
    pub recorded_at: DateTime<Utc>,
    /// Free-form context for the analytics consumer, e.g. scenario name
    /// or report type. Never read back by the engine itself.
    pub metadata: serde_json::Value,
}

impl UsageEvent {
    pub fn new(
        action: UsageAction,
        scenario_id: Option<ScenarioId>,
        metadata: serde_json::Value,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            action,
            scenario_id,
            recorded_at,
            metadata,
        }
    }
}
