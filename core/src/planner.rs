//! The planner — the operation surface of FinPlan.
//!
//! RULES:
//!   - The planner owns the store and the insight seam.
//!   - Every mutating operation records a usage event.
//!   - All numeric work is delegated to the pure modules; the planner
//!     never computes a metric itself.
//!   - Collaborator failures propagate unchanged — no retry, no fallback.

use crate::{
    analytics::{self, UsageSummary},
    error::{PlanError, PlanResult},
    event::{UsageAction, UsageEvent},
    insight::{DisabledBackend, InsightBackend, InsightRequest},
    metrics::ScenarioMetrics,
    report::{build_report, Report, ReportType},
    scenario::{Scenario, ScenarioInput},
    status::RiskBadge,
    store::PlanStore,
};
use chrono::Utc;

pub struct Planner {
    pub store: PlanStore,
    insight_backend: Box<dyn InsightBackend>,
}

impl Planner {
    /// A planner with no insight collaborator configured.
    pub fn new(store: PlanStore) -> Self {
        Self {
            store,
            insight_backend: Box::new(DisabledBackend),
        }
    }

    pub fn with_backend(store: PlanStore, backend: Box<dyn InsightBackend>) -> Self {
        Self {
            store,
            insight_backend: backend,
        }
    }

    /// A planner over a fresh, migrated in-memory store. Used in tests.
    pub fn in_memory() -> PlanResult<Self> {
        let store = PlanStore::in_memory()?;
        store.migrate()?;
        Ok(Self::new(store))
    }

    // ── Scenario CRUD ──────────────────────────────────────────

    pub fn create_scenario(&self, input: ScenarioInput) -> PlanResult<Scenario> {
        input.validate()?;
        let scenario = input.into_scenario(Utc::now());
        self.store.insert_scenario(&scenario)?;
        self.record(
            UsageAction::ScenarioCreated,
            Some(&scenario.id),
            serde_json::json!({ "name": scenario.name }),
        )?;
        log::info!("Created scenario '{}' ({})", scenario.name, scenario.id);
        Ok(scenario)
    }

    pub fn get_scenario(&self, id: &str) -> PlanResult<Scenario> {
        self.store
            .get_scenario(id)?
            .ok_or_else(|| PlanError::ScenarioNotFound { id: id.to_string() })
    }

    /// All scenarios, newest first.
    pub fn list_scenarios(&self) -> PlanResult<Vec<Scenario>> {
        self.store.list_scenarios()
    }

    /// Scenario list with risk badges, as the scenario manager shows it.
    pub fn list_with_badges(&self) -> PlanResult<Vec<(Scenario, RiskBadge)>> {
        Ok(self
            .store
            .list_scenarios()?
            .into_iter()
            .map(|scenario| {
                let badge = RiskBadge::for_metrics(&ScenarioMetrics::for_scenario(&scenario));
                (scenario, badge)
            })
            .collect())
    }

    /// Full replace of the name and all five numeric fields.
    pub fn update_scenario(&self, id: &str, input: ScenarioInput) -> PlanResult<Scenario> {
        input.validate()?;
        if !self.store.update_scenario(id, &input, Utc::now())? {
            return Err(PlanError::ScenarioNotFound { id: id.to_string() });
        }
        let scenario = self.get_scenario(id)?;
        self.record(
            UsageAction::ScenarioUpdated,
            Some(id),
            serde_json::json!({ "name": scenario.name }),
        )?;
        Ok(scenario)
    }

    pub fn delete_scenario(&self, id: &str) -> PlanResult<()> {
        if !self.store.delete_scenario(id)? {
            return Err(PlanError::ScenarioNotFound { id: id.to_string() });
        }
        self.record(UsageAction::ScenarioDeleted, Some(id), serde_json::json!({}))?;
        log::info!("Deleted scenario {id}");
        Ok(())
    }

    /// Create a copy of an existing scenario under "<name> (Copy)".
    pub fn duplicate_scenario(&self, id: &str) -> PlanResult<Scenario> {
        let source = self.get_scenario(id)?;
        let mut input = source.input();
        input.name = format!("{} (Copy)", input.name);
        self.create_scenario(input)
    }

    // ── Reports ────────────────────────────────────────────────

    pub fn generate_report(&self, id: &str, report_type: ReportType) -> PlanResult<Report> {
        let scenario = self.get_scenario(id)?;
        let report = build_report(&scenario, report_type, Utc::now());
        self.record(
            UsageAction::ReportGenerated,
            Some(id),
            serde_json::json!({ "report_type": report_type.tag() }),
        )?;
        Ok(report)
    }

    // ── Insights ───────────────────────────────────────────────

    /// Pass a prompt to the insight collaborator and return its text
    /// untouched. Backend failure propagates unchanged.
    pub fn request_insight(&self, request: &InsightRequest) -> PlanResult<String> {
        let text = self.insight_backend.generate(request)?;
        self.record(
            UsageAction::InsightRequested,
            None,
            serde_json::json!({ "mode": request.mode() }),
        )?;
        Ok(text)
    }

    // ── Analytics ──────────────────────────────────────────────

    pub fn usage_summary(&self) -> PlanResult<UsageSummary> {
        analytics::usage_summary(&self.store)
    }

    fn record(
        &self,
        action: UsageAction,
        scenario_id: Option<&str>,
        metadata: serde_json::Value,
    ) -> PlanResult<()> {
        let event = UsageEvent::new(
            action,
            scenario_id.map(str::to_string),
            metadata,
            Utc::now(),
        );
        self.store.append_usage(&event)
    }
}
