//! Derived financial metrics — computed on read, never persisted.
//!
//! A metric whose denominator is zero is undefined and carried as `None`
//! rather than a non-finite float. Formatting renders `None` as "--";
//! nothing downstream ever sees NaN or infinity.

use crate::scenario::Scenario;
use serde::{Deserialize, Serialize};

/// The four derived numbers for a scenario snapshot.
///
/// No rounding is applied here. Each display context applies its own
/// policy: reports round in [`crate::report::ReportMetrics`], the summary
/// card and the scenario list round in [`crate::format`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMetrics {
    /// revenue − expenses. Always defined.
    pub monthly_profit: f64,
    /// (revenue − expenses) / revenue × 100. Undefined when revenue is 0.
    pub profit_margin: Option<f64>,
    /// cash_on_hand / burn_rate, months. Undefined when burn_rate is 0.
    pub runway: Option<f64>,
    /// cash_on_hand / monthly_profit, months. Undefined at break-even.
    pub break_even_point: Option<f64>,
}

impl ScenarioMetrics {
    pub fn for_scenario(scenario: &Scenario) -> Self {
        Self::from_parts(
            scenario.revenue,
            scenario.expenses,
            scenario.cash_on_hand,
            scenario.burn_rate,
        )
    }

    pub fn from_parts(revenue: f64, expenses: f64, cash_on_hand: f64, burn_rate: f64) -> Self {
        let monthly_profit = revenue - expenses;
        Self {
            monthly_profit,
            profit_margin: finite_ratio(monthly_profit * 100.0, revenue),
            runway: finite_ratio(cash_on_hand, burn_rate),
            break_even_point: finite_ratio(cash_on_hand, monthly_profit),
        }
    }
}

/// `numerator / denominator`, or `None` when the quotient is not finite.
fn finite_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    let quotient = numerator / denominator;
    quotient.is_finite().then_some(quotient)
}
