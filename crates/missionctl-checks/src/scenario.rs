//! Scenario file format.
//!
//! A scenario stocks a fresh ledger and states what the checks should see.
//! Every section is optional; a missing expectation skips its check.

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;

/// Built-in pre-launch scenario.
pub const DEFAULT_SCENARIO_JSON: &str = include_str!("../../../data/mission_scenario.json");

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    /// Calendar date to replay on. `None` uses the host's local date.
    pub today: Option<NaiveDate>,
    pub crew: Vec<CrewSpec>,
    pub supplies: Vec<SupplySpec>,
    pub fuel: Option<FuelLeg>,
    pub log: Vec<String>,
    pub perishables: Vec<PerishableSpec>,
    pub scores: Vec<ScoreSpec>,
    pub expect: Expectations,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrewSpec {
    pub role: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SupplySpec {
    pub item: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FuelLeg {
    pub distance_km: f64,
    pub efficiency_km_per_unit: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerishableSpec {
    pub name: String,
    pub offset_days: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreSpec {
    pub member: String,
    pub score: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Expectations {
    pub crew_count: Option<usize>,
    pub crew_lookups: Vec<CrewLookup>,
    pub total_supplies: Option<u64>,
    pub fuel_units: Option<u64>,
    pub recent_logs: Option<RecentLogs>,
    pub perishables_after_sweep: Option<usize>,
    pub averages: Vec<AverageExpectation>,
}

/// `name: None` expects the role to be vacant.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrewLookup {
    pub role: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecentLogs {
    pub count: i64,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AverageExpectation {
    pub member: String,
    pub average: f64,
}

impl Scenario {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("scenario JSON does not match the expected shape")
    }

    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(DEFAULT_SCENARIO_JSON).context("built-in scenario")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parsing scenario {}", path.display()))
    }
}
