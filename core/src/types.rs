//! Shared primitive types used across the planning engine.

/// A stable, unique identifier for a stored scenario.
pub type ScenarioId = String;

/// Identifier for a usage event record.
pub type EventId = String;
