//! Usage analytics — read-only aggregation over the store.
//!
//! This module is REACTIVE. It does not record events or mutate
//! scenarios; it observes what the planner wrote and computes summary
//! statistics for the dashboard's analytics view.

use crate::{
    error::PlanResult,
    event::UsageEvent,
    store::PlanStore,
};
use serde::Serialize;
use std::collections::HashMap;

/// How many events the recent-activity feed carries.
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct UsageSummary {
    pub total_scenarios: i64,
    pub average_revenue: f64,
    pub average_expenses: f64,
    /// Mean runway across scenarios with a nonzero burn rate; `None`
    /// when no stored scenario has a defined runway.
    pub average_runway: Option<f64>,
    pub recent_activity: Vec<UsageEvent>,
    pub action_counts: HashMap<String, i64>,
}

pub fn usage_summary(store: &PlanStore) -> PlanResult<UsageSummary> {
    let stats = store.scenario_stats()?;
    Ok(UsageSummary {
        total_scenarios: stats.total_scenarios,
        average_revenue: stats.average_revenue,
        average_expenses: stats.average_expenses,
        average_runway: stats.average_runway,
        recent_activity: store.recent_usage(RECENT_ACTIVITY_LIMIT, None)?,
        action_counts: store.usage_action_counts()?,
    })
}
