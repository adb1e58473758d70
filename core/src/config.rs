//! Demo scenario presets.
//!
//! The runner seeds a fresh database from these. The catalog lives in
//! data/presets/scenario_presets.json; tests use the hardcoded defaults.

use crate::scenario::ScenarioInput;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetConfig {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub expenses: f64,
    pub growth_rate: f64,
    pub burn_rate: f64,
    pub cash_on_hand: f64,
}

impl PresetConfig {
    pub fn input(&self) -> ScenarioInput {
        ScenarioInput {
            name: self.name.clone(),
            revenue: self.revenue,
            expenses: self.expenses,
            growth_rate: self.growth_rate,
            burn_rate: self.burn_rate,
            cash_on_hand: self.cash_on_hand,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct PresetFile {
    presets: Vec<PresetConfig>,
}

#[derive(Debug, Clone)]
pub struct PlanConfig {
    pub presets: Vec<PresetConfig>,
}

impl PlanConfig {
    /// Load from the data/ directory.
    /// In tests, use PlanConfig::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/presets/scenario_presets.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let file: PresetFile = serde_json::from_str(&content)?;
        Ok(Self {
            presets: file.presets,
        })
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            presets: vec![
                PresetConfig {
                    id: "conservative".into(),
                    name: "Conservative Growth".into(),
                    revenue: 8_000_000.0,   // 80 lakhs
                    expenses: 6_400_000.0,  // 64 lakhs
                    growth_rate: 5.0,
                    burn_rate: 1_200_000.0, // 12 lakhs
                    cash_on_hand: 40_000_000.0, // 4 crores
                },
                PresetConfig {
                    id: "aggressive".into(),
                    name: "Aggressive Expansion".into(),
                    revenue: 12_000_000.0,  // 1.2 crores
                    expenses: 9_600_000.0,  // 96 lakhs
                    growth_rate: 15.0,
                    burn_rate: 2_000_000.0, // 20 lakhs
                    cash_on_hand: 24_000_000.0, // 2.4 crores
                },
                PresetConfig {
                    id: "steady".into(),
                    name: "Steady State".into(),
                    revenue: 6_400_000.0,   // 64 lakhs
                    expenses: 5_600_000.0,  // 56 lakhs
                    growth_rate: 2.0,
                    burn_rate: 800_000.0,   // 8 lakhs
                    cash_on_hand: 60_000_000.0, // 6 crores
                },
            ],
        }
    }
}
