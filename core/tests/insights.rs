//! Insight prompt rendering and the collaborator seam.

use finplan_core::{
    command::{detect_change, MetricSnapshot},
    error::{PlanError, PlanResult},
    insight::{InsightBackend, InsightRequest},
    planner::Planner,
    scenario::ScenarioInput,
    store::PlanStore,
};

fn before() -> MetricSnapshot {
    MetricSnapshot::new(8_000_000.0, 6_400_000.0, 33)
}

fn after() -> MetricSnapshot {
    MetricSnapshot::new(9_600_000.0, 6_400_000.0, 33)
}

#[test]
fn insight_prompt_carries_formatted_rupee_figures() {
    let request = InsightRequest::Insight {
        before: before(),
        after: after(),
        action: "Increased revenue by 20.0%".into(),
    };
    let prompt = request.render_prompt();

    assert!(prompt.contains("Summarize in 1–2 sentences"));
    assert!(prompt.contains("Indian business terminology"));
    assert!(prompt.contains("Before: Revenue: ₹80,00,000, Expenses: ₹64,00,000, Runway: 33 months"));
    assert!(prompt.contains("After: Revenue: ₹96,00,000"));
    assert!(prompt.contains("Action: Increased revenue by 20.0%"));
}

#[test]
fn naming_prompt_shows_the_before_after_arrows() {
    let request = InsightRequest::Naming {
        before: before(),
        after: after(),
        action: "Increased revenue by 20.0%".into(),
    };
    let prompt = request.render_prompt();

    assert!(prompt.contains("short 2–3 word name"));
    assert!(prompt.contains("Revenue change: ₹80,00,000 → ₹96,00,000"));
    assert!(prompt.contains("Runway change: 33 → 33 months"));
}

#[test]
fn report_prompt_asks_for_an_executive_summary() {
    let request = InsightRequest::Report {
        before: before(),
        after: after(),
        action: "Raised prices".into(),
    };
    let prompt = request.render_prompt();

    assert!(prompt.contains("executive summary paragraph"));
    assert!(prompt.contains("PDF report"));
}

#[test]
fn health_prompt_uses_only_the_current_snapshot() {
    let request = InsightRequest::Health {
        current: after(),
        action: "Cut marketing spend".into(),
    };
    let prompt = request.render_prompt();

    assert!(prompt.contains("scale of 0–100"));
    assert!(prompt.contains("Current metrics: Revenue: ₹96,00,000"));
    assert!(prompt.contains("Recent change: Cut marketing spend"));
    assert!(!prompt.contains("Before:"));
}

#[test]
fn mode_tags_are_stable() {
    let change = detect_change(&before(), &after()).expect("20% move fires");
    let request = InsightRequest::from_change(change);
    assert_eq!(request.mode(), "insight");

    let health = InsightRequest::Health {
        current: after(),
        action: String::new(),
    };
    assert_eq!(health.mode(), "health");
}

/// Backend that returns a canned response, standing in for the hosted
/// model in tests.
struct ScriptedBackend {
    response: &'static str,
}

impl InsightBackend for ScriptedBackend {
    fn generate(&self, _request: &InsightRequest) -> PlanResult<String> {
        Ok(self.response.to_string())
    }
}

#[test]
fn planner_returns_backend_text_untouched_and_tracks_usage() {
    let store = PlanStore::in_memory().unwrap();
    store.migrate().unwrap();
    let planner = Planner::with_backend(
        store,
        Box::new(ScriptedBackend {
            response: "  Margin improves; runway holds steady.  ",
        }),
    );

    let request = InsightRequest::Health {
        current: after(),
        action: "Raised prices".into(),
    };
    let text = planner.request_insight(&request).unwrap();

    // No trimming, parsing, or validation of collaborator output.
    assert_eq!(text, "  Margin improves; runway holds steady.  ");

    let counts = planner.store.usage_action_counts().unwrap();
    assert_eq!(counts.get("insight_requested"), Some(&1));
}

#[test]
fn disabled_backend_failure_propagates_unchanged() {
    let planner = Planner::in_memory().unwrap();
    // Make sure the failure is the collaborator's, not a missing scenario.
    planner
        .create_scenario(ScenarioInput {
            name: "Base".into(),
            revenue: 1_000_000.0,
            expenses: 800_000.0,
            growth_rate: 5.0,
            burn_rate: 100_000.0,
            cash_on_hand: 2_000_000.0,
        })
        .unwrap();

    let request = InsightRequest::Health {
        current: after(),
        action: "anything".into(),
    };
    let err = planner.request_insight(&request).unwrap_err();
    assert!(matches!(err, PlanError::InsightUnavailable { .. }));

    // A failed request records no usage event.
    let counts = planner.store.usage_action_counts().unwrap();
    assert_eq!(counts.get("insight_requested"), None);
}
