//! Mission checks. Stock a fresh ledger from a scenario, then compare.
//!
//! Each section loads its own sub-ledger and checks only its own
//! expectations, so one broken section never masks another.

use chrono::NaiveDate;
use missionctl_logic::clock::FixedClock;
use missionctl_logic::ledger::MissionLedger;
use serde::Serialize;

use crate::scenario::Scenario;

/// Averages arrive already rounded, so only float noise is tolerated.
const AVERAGE_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub section: &'static str,
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    fn new(section: &'static str, name: &str, passed: bool, detail: String) -> Self {
        Self {
            section,
            name: name.to_string(),
            passed,
            detail,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub scenario: String,
    pub today: NaiveDate,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<CheckResult>,
}

pub fn run(scenario: &Scenario) -> Report {
    let mut ledger = match scenario.today {
        Some(date) => MissionLedger::with_clock(FixedClock(date)),
        None => MissionLedger::new(),
    };
    tracing::info!(scenario = %scenario.name, today = %ledger.today(), "running mission checks");

    let mut results = Vec::new();
    results.extend(check_crew(&mut ledger, scenario));
    results.extend(check_supplies(&mut ledger, scenario));
    results.extend(check_fuel(&ledger, scenario));
    results.extend(check_mission_log(&mut ledger, scenario));
    results.extend(check_perishables(&mut ledger, scenario));
    results.extend(check_qualifications(&mut ledger, scenario));

    let passed = results.iter().filter(|r| r.passed).count();
    Report {
        scenario: scenario.name.clone(),
        today: ledger.today(),
        passed,
        failed: results.len() - passed,
        results,
    }
}

// ── 1. Crew Roster ──────────────────────────────────────────────────────

fn check_crew(ledger: &mut MissionLedger, scenario: &Scenario) -> Vec<CheckResult> {
    const SECTION: &str = "Crew Roster";
    let mut results = Vec::new();

    for crew in &scenario.crew {
        ledger.assign_crew(&crew.role, &crew.name);
    }

    if let Some(expected) = scenario.expect.crew_count {
        let count = ledger.crew_count();
        results.push(CheckResult::new(
            SECTION,
            "crew_count",
            count == expected,
            format!("expected {expected} crew, got {count}"),
        ));
    }

    for lookup in &scenario.expect.crew_lookups {
        let found = ledger.find_crew(&lookup.role);
        results.push(CheckResult::new(
            SECTION,
            &format!("crew_lookup[{}]", lookup.role),
            found == lookup.name.as_deref(),
            format!(
                "role '{}': expected {:?}, got {:?}",
                lookup.role, lookup.name, found
            ),
        ));
    }

    results
}

// ── 2. Supply Inventory ─────────────────────────────────────────────────

fn check_supplies(ledger: &mut MissionLedger, scenario: &Scenario) -> Vec<CheckResult> {
    const SECTION: &str = "Supply Inventory";
    let mut results = Vec::new();

    for supply in &scenario.supplies {
        if let Err(e) = ledger.set_supply(&supply.item, supply.quantity) {
            results.push(CheckResult::new(
                SECTION,
                &format!("supply_load[{}]", supply.item),
                false,
                e.to_string(),
            ));
        }
    }

    if let Some(expected) = scenario.expect.total_supplies {
        let (passed, detail) = match ledger.total_supplies() {
            Ok(total) => (
                total == expected,
                format!("expected {expected}, got {total}"),
            ),
            Err(e) => (false, e.to_string()),
        };
        results.push(CheckResult::new(SECTION, "supply_total", passed, detail));
    }

    results
}

// ── 3. Fuel Calculation ─────────────────────────────────────────────────

fn check_fuel(ledger: &MissionLedger, scenario: &Scenario) -> Vec<CheckResult> {
    const SECTION: &str = "Fuel Calculation";
    let mut results = Vec::new();

    let (Some(leg), Some(expected)) = (scenario.fuel, scenario.expect.fuel_units) else {
        return results;
    };

    let (passed, detail) = match ledger.fuel_required(leg.distance_km, leg.efficiency_km_per_unit)
    {
        Ok(units) => (
            units == expected,
            format!(
                "{} km at {} km/unit: expected {expected} units, got {units}",
                leg.distance_km, leg.efficiency_km_per_unit
            ),
        ),
        Err(e) => (false, e.to_string()),
    };
    results.push(CheckResult::new(SECTION, "fuel_required", passed, detail));
    results
}

// ── 4. Mission Log ──────────────────────────────────────────────────────

fn check_mission_log(ledger: &mut MissionLedger, scenario: &Scenario) -> Vec<CheckResult> {
    const SECTION: &str = "Mission Log";
    let mut results = Vec::new();

    for message in &scenario.log {
        ledger.log_event(message);
    }

    if let Some(expected) = &scenario.expect.recent_logs {
        let (passed, detail) = match ledger.recent_logs(expected.count) {
            Ok(recent) => (
                recent == expected.entries.as_slice(),
                format!(
                    "last {}: expected [{}], got [{}]",
                    expected.count,
                    expected.entries.join(" | "),
                    recent.join(" | ")
                ),
            ),
            Err(e) => (false, e.to_string()),
        };
        results.push(CheckResult::new(SECTION, "recent_logs", passed, detail));
    }

    results
}

// ── 5. Supply Cleanup ───────────────────────────────────────────────────

fn check_perishables(ledger: &mut MissionLedger, scenario: &Scenario) -> Vec<CheckResult> {
    const SECTION: &str = "Supply Cleanup";
    let mut results = Vec::new();

    for item in &scenario.perishables {
        if let Err(e) = ledger.add_perishable(&item.name, item.offset_days) {
            results.push(CheckResult::new(
                SECTION,
                &format!("perishable_load[{}]", item.name),
                false,
                e.to_string(),
            ));
        }
    }

    if let Some(expected) = scenario.expect.perishables_after_sweep {
        let removed = ledger.sweep_expired();
        let remaining = ledger.perishable_count();
        results.push(CheckResult::new(
            SECTION,
            "expired_sweep",
            remaining == expected,
            format!("removed {removed}, expected {expected} remaining, got {remaining}"),
        ));

        let removed_again = ledger.sweep_expired();
        results.push(CheckResult::new(
            SECTION,
            "expired_sweep_idempotent",
            removed_again == 0 && ledger.perishable_count() == remaining,
            format!("second sweep removed {removed_again}"),
        ));
    }

    results
}

// ── 6. Crew Qualification ───────────────────────────────────────────────

fn check_qualifications(ledger: &mut MissionLedger, scenario: &Scenario) -> Vec<CheckResult> {
    const SECTION: &str = "Crew Qualification";
    let mut results = Vec::new();

    for entry in &scenario.scores {
        ledger.record_score(&entry.member, entry.score);
    }

    for expected in &scenario.expect.averages {
        let avg = ledger.average_score(&expected.member);
        results.push(CheckResult::new(
            SECTION,
            &format!("average[{}]", expected.member),
            (avg - expected.average).abs() < AVERAGE_TOLERANCE,
            format!("expected {:.2}, got {avg}", expected.average),
        ));
    }

    results
}
