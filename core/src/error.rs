use crate::types::ScenarioId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid scenario: {reason}")]
    InvalidScenario { reason: String },

    #[error("Scenario '{id}' not found")]
    ScenarioNotFound { id: ScenarioId },

    #[error("Insight backend unavailable: {reason}")]
    InsightUnavailable { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
