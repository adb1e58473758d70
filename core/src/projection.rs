//! The projection engine — compounds a scenario forward twelve months.
//!
//! RECURRENCE (fixed, state carried forward, month = 1..=12):
//!   monthly_growth = growth_rate / 100 / 12
//!   revenue_m = revenue_{m-1} × (1 + monthly_growth)
//!   profit_m  = revenue_m − expenses          (expenses held constant)
//!   cash_m    = cash_{m-1} + profit_m − burn_rate
//!
//! Output records round revenue/profit/cash half-up to whole rupees while
//! the unrounded state carries forward. Runway is a whole number of months,
//! clamped to 0 once cash is non-positive; there is no negative-runway
//! signaling.

use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};

pub const PROJECTION_HORIZON_MONTHS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// 1-based month index.
    pub month: u32,
    pub revenue: i64,
    /// Held constant across the horizon, reported unrounded.
    pub expenses: f64,
    pub profit: i64,
    /// Cumulative balance. Can go negative.
    pub cash_balance: i64,
    /// Whole months of runway at this month's balance; 0 once cash is
    /// non-positive, `None` when burn_rate is zero (undefined).
    pub runway: Option<i64>,
}

/// Project revenue and cash forward over the fixed horizon.
///
/// Pure function of the scenario: no randomness, no external state;
/// identical inputs yield an identical 12-element sequence.
pub fn project(scenario: &Scenario) -> Vec<ProjectionPoint> {
    let monthly_growth = scenario.growth_rate / 100.0 / 12.0;
    let mut revenue = scenario.revenue;
    let mut cash = scenario.cash_on_hand;
    let mut points = Vec::with_capacity(PROJECTION_HORIZON_MONTHS as usize);

    for month in 1..=PROJECTION_HORIZON_MONTHS {
        revenue *= 1.0 + monthly_growth;
        let profit = revenue - scenario.expenses;
        cash = cash + profit - scenario.burn_rate;

        let runway = if cash > 0.0 {
            let months = cash / scenario.burn_rate;
            months.is_finite().then(|| months.round() as i64)
        } else {
            Some(0)
        };

        points.push(ProjectionPoint {
            month,
            revenue: revenue.round() as i64,
            expenses: scenario.expenses,
            profit: profit.round() as i64,
            cash_balance: cash.round() as i64,
            runway,
        });
    }

    points
}
