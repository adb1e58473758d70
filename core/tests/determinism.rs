//! End-to-end determinism: identical inputs produce identical payloads.

use chrono::{DateTime, Utc};
use finplan_core::{
    report::{build_report, ReportType},
    scenario::Scenario,
};

fn fixed_time(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
}

fn fixed_scenario() -> Scenario {
    let at = fixed_time("2025-06-01T00:00:00+00:00");
    Scenario {
        id: "scenario-fixed".into(),
        name: "Steady State".into(),
        revenue: 6_400_000.0,
        expenses: 5_600_000.0,
        growth_rate: 12.0,
        burn_rate: 800_000.0,
        cash_on_hand: 60_000_000.0,
        created_at: at,
        updated_at: at,
    }
}

#[test]
fn identical_scenarios_produce_identical_reports() {
    let generated_at = fixed_time("2025-07-01T09:00:00+00:00");

    let first = build_report(&fixed_scenario(), ReportType::Full, generated_at);
    let second = build_report(&fixed_scenario(), ReportType::Full, generated_at);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap(),
        "serialized payloads must match byte for byte"
    );
}

#[test]
fn reports_survive_a_serde_round_trip() {
    let report = build_report(
        &fixed_scenario(),
        ReportType::Full,
        fixed_time("2025-07-01T09:00:00+00:00"),
    );

    let json = serde_json::to_string(&report).unwrap();
    let back: finplan_core::report::Report = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
