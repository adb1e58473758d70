//! The scenario record — the central entity of the planner.
//!
//! A scenario is five numbers and a name. Everything else in the engine
//! (metrics, projections, classifications, reports) is derived from it on
//! read and never stored.

use crate::{
    error::{PlanError, PlanResult},
    types::ScenarioId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    /// Monthly turnover, rupees.
    pub revenue: f64,
    /// Monthly expenses, rupees.
    pub expenses: f64,
    /// Annualized growth, percent, signed.
    pub growth_rate: f64,
    /// Net cash outflow per month. May differ from expenses − revenue.
    pub burn_rate: f64,
    pub cash_on_hand: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Scenario {
    /// The writable fields of this scenario, e.g. as a duplication source.
    pub fn input(&self) -> ScenarioInput {
        ScenarioInput {
            name: self.name.clone(),
            revenue: self.revenue,
            expenses: self.expenses,
            growth_rate: self.growth_rate,
            burn_rate: self.burn_rate,
            cash_on_hand: self.cash_on_hand,
        }
    }
}

/// The writable fields of a scenario. Used for both create and update;
/// an update is a full replace of the name and all five numeric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub name: String,
    pub revenue: f64,
    pub expenses: f64,
    pub growth_rate: f64,
    pub burn_rate: f64,
    pub cash_on_hand: f64,
}

impl ScenarioInput {
    /// Boundary validation. Zero and negative values pass (runway and
    /// margin invariants are soft); non-finite numbers and empty names
    /// are rejected before any computation or storage runs.
    pub fn validate(&self) -> PlanResult<()> {
        if self.name.trim().is_empty() {
            return Err(PlanError::InvalidScenario {
                reason: "name must not be empty".into(),
            });
        }
        for (field, value) in [
            ("revenue", self.revenue),
            ("expenses", self.expenses),
            ("growth_rate", self.growth_rate),
            ("burn_rate", self.burn_rate),
            ("cash_on_hand", self.cash_on_hand),
        ] {
            if !value.is_finite() {
                return Err(PlanError::InvalidScenario {
                    reason: format!("{field} must be a finite number"),
                });
            }
        }
        Ok(())
    }

    /// Materialize a new scenario record with a fresh id and timestamps.
    pub fn into_scenario(self, now: DateTime<Utc>) -> Scenario {
        Scenario {
            id: uuid::Uuid::new_v4().to_string(),
            name: self.name,
            revenue: self.revenue,
            expenses: self.expenses,
            growth_rate: self.growth_rate,
            burn_rate: self.burn_rate,
            cash_on_hand: self.cash_on_hand,
            created_at: now,
            updated_at: now,
        }
    }
}
