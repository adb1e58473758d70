//! Projection engine — recurrence, rounding, clamping, determinism.

use chrono::Utc;
use finplan_core::{
    projection::{project, PROJECTION_HORIZON_MONTHS},
    scenario::{Scenario, ScenarioInput},
};

fn scenario(
    revenue: f64,
    expenses: f64,
    growth_rate: f64,
    burn_rate: f64,
    cash_on_hand: f64,
) -> Scenario {
    ScenarioInput {
        name: "projection test".into(),
        revenue,
        expenses,
        growth_rate,
        burn_rate,
        cash_on_hand,
    }
    .into_scenario(Utc::now())
}

#[test]
fn first_month_matches_the_recurrence_by_hand() {
    // 12% annual growth → 1% monthly.
    let s = scenario(6_400_000.0, 5_600_000.0, 12.0, 800_000.0, 60_000_000.0);
    let points = project(&s);

    let first = &points[0];
    assert_eq!(first.month, 1);
    assert_eq!(first.revenue, 6_464_000, "6,400,000 × 1.01");
    assert_eq!(first.profit, 864_000);
    assert_eq!(first.cash_balance, 60_064_000);
    assert_eq!(first.runway, Some(75), "round(60,064,000 / 800,000)");
    assert_eq!(first.expenses, 5_600_000.0);
}

#[test]
fn second_month_compounds_on_the_first() {
    let s = scenario(6_400_000.0, 5_600_000.0, 12.0, 800_000.0, 60_000_000.0);
    let points = project(&s);

    let second = &points[1];
    assert_eq!(second.revenue, 6_528_640, "6,464,000 × 1.01");
    assert_eq!(second.profit, 928_640);
    assert_eq!(second.cash_balance, 60_192_640);
}

#[test]
fn horizon_is_twelve_ordered_months_with_constant_expenses() {
    let s = scenario(8_000_000.0, 6_400_000.0, 5.0, 1_200_000.0, 40_000_000.0);
    let points = project(&s);

    assert_eq!(points.len(), PROJECTION_HORIZON_MONTHS as usize);
    for (i, point) in points.iter().enumerate() {
        assert_eq!(point.month, (i + 1) as u32);
        assert_eq!(point.expenses, 6_400_000.0, "expenses held constant");
    }
}

#[test]
fn negative_growth_shrinks_revenue() {
    let s = scenario(1_000_000.0, 500_000.0, -12.0, 100_000.0, 10_000_000.0);
    let points = project(&s);

    assert_eq!(points[0].revenue, 990_000, "1,000,000 × 0.99");
    assert!(points[11].revenue < points[0].revenue);
}

#[test]
fn runway_clamps_to_zero_once_cash_is_gone() {
    // No profit, heavy burn: cash hits zero in month 2 and goes negative
    // after. The clamp reports 0, never a deficit.
    let s = scenario(100_000.0, 100_000.0, 0.0, 500_000.0, 1_000_000.0);
    let points = project(&s);

    assert_eq!(points[0].cash_balance, 500_000);
    assert_eq!(points[0].runway, Some(1));
    assert_eq!(points[1].cash_balance, 0);
    assert_eq!(points[1].runway, Some(0));
    assert_eq!(points[2].cash_balance, -500_000);
    assert_eq!(points[2].runway, Some(0));
    assert_eq!(points[11].runway, Some(0));
}

#[test]
fn zero_burn_leaves_runway_undefined_while_cash_is_positive() {
    let s = scenario(1_000_000.0, 800_000.0, 0.0, 0.0, 5_000_000.0);
    let points = project(&s);

    for point in &points {
        assert!(point.cash_balance > 0);
        assert_eq!(point.runway, None, "month {}", point.month);
    }
}

#[test]
fn projection_is_deterministic() {
    let s = scenario(12_000_000.0, 9_600_000.0, 15.0, 2_000_000.0, 24_000_000.0);

    let first = project(&s);
    let second = project(&s);

    assert_eq!(first, second, "identical inputs, identical sequences");
}
