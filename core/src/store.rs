//! SQLite persistence layer.
//!
//! RULE: Only store.rs talks to the database.
//! The planner and analytics call store methods — they never execute SQL
//! directly.

use crate::{
    error::PlanResult,
    event::{UsageAction, UsageEvent},
    scenario::{Scenario, ScenarioInput},
};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;

pub struct PlanStore {
    conn: Connection,
    path: Option<String>, // None for :memory:, Some(path) for file
}

/// Aggregate statistics over all stored scenarios, for analytics.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioStats {
    pub total_scenarios: i64,
    pub average_revenue: f64,
    pub average_expenses: f64,
    /// Averaged over scenarios with a nonzero burn rate; `None` when
    /// no scenario has a defined runway.
    pub average_runway: Option<f64>,
}

impl PlanStore {
    pub fn open(path: &str) -> PlanResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (shared-memory and :memory: ignore it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self {
            conn,
            path: Some(path.to_string()),
        })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> PlanResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn, path: None })
    }

    /// Reopen a new connection to the same database.
    /// For in-memory databases, this returns a new in-memory database
    /// (isolated). For file-based databases, this opens the same file.
    pub fn reopen(&self) -> PlanResult<Self> {
        match &self.path {
            Some(p) => Self::open(p),
            None => Self::in_memory(),
        }
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> PlanResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_foundation.sql"))?;
        Ok(())
    }

    // ── Scenario ───────────────────────────────────────────────

    pub fn insert_scenario(&self, s: &Scenario) -> PlanResult<()> {
        self.conn.execute(
            "INSERT INTO scenario (
                scenario_id, name, revenue, expenses, growth_rate,
                burn_rate, cash_on_hand, created_at, updated_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                s.id,
                s.name,
                s.revenue,
                s.expenses,
                s.growth_rate,
                s.burn_rate,
                s.cash_on_hand,
                s.created_at.to_rfc3339(),
                s.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn get_scenario(&self, id: &str) -> PlanResult<Option<Scenario>> {
        let mut stmt = self.conn.prepare(
            "SELECT scenario_id, name, revenue, expenses, growth_rate,
                    burn_rate, cash_on_hand, created_at, updated_at
             FROM scenario WHERE scenario_id = ?1",
        )?;
        let scenario = stmt.query_row(params![id], scenario_row_mapper).optional()?;
        Ok(scenario)
    }

    /// All scenarios, newest first.
    pub fn list_scenarios(&self) -> PlanResult<Vec<Scenario>> {
        let mut stmt = self.conn.prepare(
            "SELECT scenario_id, name, revenue, expenses, growth_rate,
                    burn_rate, cash_on_hand, created_at, updated_at
             FROM scenario
             ORDER BY created_at DESC",
        )?;
        let rows = stmt.query_map([], scenario_row_mapper)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Full replace of the name and all five numeric fields.
    /// Returns false when no scenario has this id.
    pub fn update_scenario(
        &self,
        id: &str,
        input: &ScenarioInput,
        updated_at: DateTime<Utc>,
    ) -> PlanResult<bool> {
        let changed = self.conn.execute(
            "UPDATE scenario SET
                name = ?1, revenue = ?2, expenses = ?3, growth_rate = ?4,
                burn_rate = ?5, cash_on_hand = ?6, updated_at = ?7
             WHERE scenario_id = ?8",
            params![
                input.name,
                input.revenue,
                input.expenses,
                input.growth_rate,
                input.burn_rate,
                input.cash_on_hand,
                updated_at.to_rfc3339(),
                id,
            ],
        )?;
        Ok(changed > 0)
    }

    pub fn delete_scenario(&self, id: &str) -> PlanResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM scenario WHERE scenario_id = ?1", params![id])?;
        Ok(changed > 0)
    }

    pub fn scenario_count(&self) -> PlanResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM scenario", [], |row| row.get(0))
            .map_err(Into::into)
    }

    // ── Usage events ───────────────────────────────────────────

    pub fn append_usage(&self, event: &UsageEvent) -> PlanResult<()> {
        self.conn.execute(
            "INSERT INTO usage_event (
                event_id, action, scenario_id, recorded_at, metadata
             ) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                event.id,
                event.action.tag(),
                event.scenario_id.as_deref(),
                event.recorded_at.to_rfc3339(),
                event.metadata.to_string(),
            ],
        )?;
        Ok(())
    }

    /// Most recent events, newest first, optionally for one scenario.
    pub fn recent_usage(
        &self,
        limit: usize,
        scenario_id: Option<&str>,
    ) -> PlanResult<Vec<UsageEvent>> {
        let events = match scenario_id {
            Some(sid) => {
                let mut stmt = self.conn.prepare(
                    "SELECT event_id, action, scenario_id, recorded_at, metadata
                     FROM usage_event WHERE scenario_id = ?1
                     ORDER BY recorded_at DESC, event_id DESC LIMIT ?2",
                )?;
                let rows = stmt.query_map(params![sid, limit as i64], usage_row_mapper)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = self.conn.prepare(
                    "SELECT event_id, action, scenario_id, recorded_at, metadata
                     FROM usage_event
                     ORDER BY recorded_at DESC, event_id DESC LIMIT ?1",
                )?;
                let rows = stmt.query_map(params![limit as i64], usage_row_mapper)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };
        Ok(events)
    }

    pub fn usage_action_counts(&self) -> PlanResult<HashMap<String, i64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT action, COUNT(*) FROM usage_event GROUP BY action")?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get(1)?)))?;
        let mut counts = HashMap::new();
        for row in rows {
            let (action, count) = row?;
            counts.insert(action, count);
        }
        Ok(counts)
    }

    pub fn usage_event_count(&self) -> PlanResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM usage_event", [], |row| row.get(0))
            .map_err(Into::into)
    }

    // ── Aggregates ─────────────────────────────────────────────

    pub fn scenario_stats(&self) -> PlanResult<ScenarioStats> {
        self.conn
            .query_row(
                "SELECT COUNT(*),
                        COALESCE(AVG(revenue), 0.0),
                        COALESCE(AVG(expenses), 0.0),
                        AVG(CASE WHEN burn_rate != 0.0
                                 THEN cash_on_hand / burn_rate END)
                 FROM scenario",
                [],
                |row| {
                    Ok(ScenarioStats {
                        total_scenarios: row.get(0)?,
                        average_revenue: row.get(1)?,
                        average_expenses: row.get(2)?,
                        average_runway: row.get(3)?,
                    })
                },
            )
            .map_err(Into::into)
    }
}

fn scenario_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<Scenario> {
    Ok(Scenario {
        id: row.get(0)?,
        name: row.get(1)?,
        revenue: row.get(2)?,
        expenses: row.get(3)?,
        growth_rate: row.get(4)?,
        burn_rate: row.get(5)?,
        cash_on_hand: row.get(6)?,
        created_at: timestamp_column(row, 7)?,
        updated_at: timestamp_column(row, 8)?,
    })
}

fn usage_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<UsageEvent> {
    let tag: String = row.get(1)?;
    let action = UsageAction::from_tag(&tag).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            format!("unknown usage action '{tag}'").into(),
        )
    })?;
    let metadata_raw: String = row.get(4)?;
    let metadata = serde_json::from_str(&metadata_raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(UsageEvent {
        id: row.get(0)?,
        action,
        scenario_id: row.get(2)?,
        recorded_at: timestamp_column(row, 3)?,
        metadata,
    })
}

fn timestamp_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}
