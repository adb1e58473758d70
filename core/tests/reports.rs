//! Report assembly — rounding policy, projection payload, usage tracking.

use chrono::Utc;
use finplan_core::{
    planner::Planner,
    report::{build_report, ReportType},
    scenario::ScenarioInput,
};

fn input() -> ScenarioInput {
    ScenarioInput {
        name: "Working Capital Review".into(),
        revenue: 9_000_000.0,
        expenses: 6_000_000.0,
        growth_rate: 12.0,
        burn_rate: 3_000_000.0,
        cash_on_hand: 10_000_000.0,
    }
}

#[test]
fn report_metrics_use_the_report_rounding_policy() {
    let scenario = input().into_scenario(Utc::now());
    let report = build_report(&scenario, ReportType::Full, Utc::now());

    // margin 33.333…% → 2 decimals; runway and break-even 3.333… → 1.
    assert_eq!(report.metrics.profit_margin, Some(33.33));
    assert_eq!(report.metrics.monthly_profit, 3_000_000);
    assert_eq!(report.metrics.runway, Some(3.3));
    assert_eq!(report.metrics.break_even_point, Some(3.3));
}

#[test]
fn undefined_metrics_stay_undefined_on_the_report() {
    let scenario = ScenarioInput {
        revenue: 0.0,
        expenses: 100.0,
        burn_rate: 0.0,
        ..input()
    }
    .into_scenario(Utc::now());
    let report = build_report(&scenario, ReportType::Full, Utc::now());

    assert_eq!(report.metrics.profit_margin, None);
    assert_eq!(report.metrics.runway, None);
    assert_eq!(report.metrics.monthly_profit, -100);
}

#[test]
fn report_carries_the_full_projection_and_passthrough_fields() {
    let scenario = input().into_scenario(Utc::now());
    let generated_at = Utc::now();
    let report = build_report(&scenario, ReportType::Summary, generated_at);

    assert_eq!(report.projections.len(), 12);
    assert_eq!(report.scenario, scenario);
    assert_eq!(report.generated_at, generated_at);
    assert_eq!(report.report_type, ReportType::Summary);
    assert_eq!(report.report_type.tag(), "summary");
}

#[test]
fn report_type_defaults_to_full() {
    assert_eq!(ReportType::default(), ReportType::Full);
    assert_eq!(ReportType::default().tag(), "full");
}

#[test]
fn planner_report_records_a_usage_event() {
    let planner = Planner::in_memory().unwrap();
    let scenario = planner.create_scenario(input()).unwrap();

    let report = planner
        .generate_report(&scenario.id, ReportType::Full)
        .unwrap();
    assert_eq!(report.scenario.id, scenario.id);

    let counts = planner.store.usage_action_counts().unwrap();
    assert_eq!(counts.get("report_generated"), Some(&1));
    assert_eq!(counts.get("scenario_created"), Some(&1));
}

#[test]
fn report_for_unknown_scenario_is_not_found() {
    let planner = Planner::in_memory().unwrap();
    assert!(planner
        .generate_report("missing", ReportType::Full)
        .is_err());
    // The failed request leaves no report_generated event behind.
    let counts = planner.store.usage_action_counts().unwrap();
    assert_eq!(counts.get("report_generated"), None);
}
