//! Integration tests for the mission ledger.
//!
//! Replays the full pre-launch checklist against one ledger:
//! crew → supplies → fuel → log → perishables → qualifications
//!
//! All tests are pure logic on a fixed calendar date.

use chrono::NaiveDate;
use missionctl_logic::clock::FixedClock;
use missionctl_logic::ledger::{LedgerSummary, MissionLedger};

// ── Helpers ────────────────────────────────────────────────────────────

fn launch_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2031, 3, 1).unwrap()
}

/// A ledger populated the way mission control stocks it before launch.
fn prelaunch_ledger() -> MissionLedger {
    let mut ledger = MissionLedger::with_clock(FixedClock(launch_day()));

    ledger.assign_crew("Commander", "Elena Vasquez");
    ledger.assign_crew("Pilot", "James Chen");
    ledger.assign_crew("Engineer", "Aisha Patel");
    ledger.assign_crew("Scientist", "Olga Novak");
    ledger.assign_crew("Medic", "David Kim");

    for (item, qty) in [
        ("Oxygen Tanks", 50),
        ("Food Rations", 200),
        ("Water Containers", 100),
        ("Medical Kits", 25),
        ("Spare Parts", 40),
    ] {
        ledger.set_supply(item, qty).unwrap();
    }

    ledger.log_event("Systems check complete");
    ledger.log_event("Crew boarding started");
    ledger.log_event("Fuel loading in progress");
    ledger.log_event("Pre-launch diagnostics running");
    ledger.log_event("Launch window confirmed");

    for (name, offset) in [
        ("Ration Pack A", 0),
        ("Ration Pack B", -5),
        ("Ration Pack C", 30),
        ("Ration Pack D", -1),
        ("Ration Pack E", 90),
    ] {
        ledger.add_perishable(name, offset).unwrap();
    }

    ledger.record_score("Vasquez", 92);
    ledger.record_score("Vasquez", 88);
    ledger.record_score("Vasquez", 95);

    ledger
}

// ── Checklist ──────────────────────────────────────────────────────────

#[test]
fn crew_roster_count_and_lookup() {
    let ledger = prelaunch_ledger();
    assert_eq!(ledger.crew_count(), 5);
    assert_eq!(ledger.find_crew("engineer"), Some("Aisha Patel"));
    assert_eq!(ledger.find_crew("Navigator"), None);
}

#[test]
fn supply_total_counts_first_item() {
    assert_eq!(prelaunch_ledger().total_supplies(), Ok(415));
}

#[test]
fn fuel_for_mars_leg() {
    assert_eq!(
        prelaunch_ledger().fuel_required(225_000_000.0, 3.7),
        Ok(60_810_811)
    );
}

#[test]
fn last_three_log_entries_in_order() {
    let ledger = prelaunch_ledger();
    assert_eq!(
        ledger.recent_logs(3).unwrap(),
        [
            "Fuel loading in progress",
            "Pre-launch diagnostics running",
            "Launch window confirmed",
        ]
    );
    assert_eq!(ledger.recent_logs(10).unwrap().len(), 5);
    assert!(ledger.recent_logs(0).unwrap().is_empty());
}

#[test]
fn expiry_sweep_keeps_three_and_is_idempotent() {
    let mut ledger = prelaunch_ledger();
    assert_eq!(ledger.sweep_expired(), 2);
    assert_eq!(ledger.perishable_count(), 3);
    assert_eq!(ledger.sweep_expired(), 0);
    assert_eq!(ledger.perishable_count(), 3);
}

#[test]
fn qualification_average_rounds() {
    let ledger = prelaunch_ledger();
    assert_eq!(ledger.average_score("Vasquez"), 91.67);
    assert_eq!(ledger.average_score("Chen"), 0.0);
}

// ── Whole-ledger views ─────────────────────────────────────────────────

#[test]
fn summary_before_and_after_sweep() {
    let mut ledger = prelaunch_ledger();
    let before = ledger.summary().unwrap();
    assert_eq!(
        before,
        LedgerSummary {
            today: launch_day(),
            crew: 5,
            supply_items: 5,
            total_supplies: 415,
            log_entries: 5,
            perishables: 5,
            expired_perishables: 2,
            qualified_members: 1,
        }
    );

    ledger.sweep_expired();
    let after = ledger.summary().unwrap();
    assert_eq!(after.perishables, 3);
    assert_eq!(after.expired_perishables, 0);
}

#[test]
fn summary_serializes_with_iso_date() {
    let summary = prelaunch_ledger().summary().unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["today"], "2031-03-01");
    assert_eq!(json["total_supplies"], 415);
}

#[test]
fn validation_errors_leave_ledger_untouched() {
    let mut ledger = prelaunch_ledger();
    let before = ledger.summary().unwrap();

    assert!(ledger.set_supply("Oxygen Tanks", -10).is_err());
    assert!(ledger.recent_logs(-1).is_err());
    assert!(ledger.add_perishable("Ration Pack Z", i64::MIN).is_err());
    assert!(ledger.fuel_required(225_000_000.0, 0.0).is_err());

    assert_eq!(ledger.summary().unwrap(), before);
    assert_eq!(ledger.supplies().quantity("Oxygen Tanks"), Some(50));
}
