//! The mission ledger, sole owner of every sub-ledger.
//!
//! [`MissionLedger`] is the surface callers (the check harness, tests, a web
//! handler) talk to. It validates signed inputs at the boundary and then
//! delegates to the sub-ledgers, which only ever see in-range values. The
//! sub-ledgers are independent: nothing written to one is visible in another.
//!
//! ```
//! use chrono::NaiveDate;
//! use missionctl_logic::clock::FixedClock;
//! use missionctl_logic::ledger::MissionLedger;
//!
//! let today = NaiveDate::from_ymd_opt(2031, 3, 1).unwrap();
//! let mut ledger = MissionLedger::with_clock(FixedClock(today));
//! ledger.assign_crew("Commander", "Elena Vasquez");
//! ledger.set_supply("Oxygen Tanks", 50).unwrap();
//! ledger.log_event("Systems check complete");
//!
//! assert_eq!(ledger.find_crew("commander"), Some("Elena Vasquez"));
//! assert_eq!(ledger.total_supplies(), Ok(50));
//! assert!(ledger.recent_logs(-1).is_err());
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::error::{LedgerError, Result};
use crate::fuel;
use crate::mission_log::MissionLog;
use crate::perishables::PerishableInventory;
use crate::qualifications::QualificationTracker;
use crate::roster::CrewRoster;
use crate::supplies::SupplyCounter;

pub struct MissionLedger {
    roster: CrewRoster,
    supplies: SupplyCounter,
    log: MissionLog,
    perishables: PerishableInventory,
    qualifications: QualificationTracker,
    clock: Box<dyn Clock>,
}

/// Point-in-time counts across all sub-ledgers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub today: NaiveDate,
    pub crew: usize,
    pub supply_items: usize,
    pub total_supplies: u64,
    pub log_entries: usize,
    pub perishables: usize,
    pub expired_perishables: usize,
    pub qualified_members: usize,
}

impl Default for MissionLedger {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl fmt::Debug for MissionLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MissionLedger")
            .field("roster", &self.roster)
            .field("supplies", &self.supplies)
            .field("log", &self.log)
            .field("perishables", &self.perishables)
            .field("qualifications", &self.qualifications)
            .field("today", &self.clock.today())
            .finish()
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| {
        LedgerError::validation(field, format!("must be non-negative, got {value}"))
    })
}

impl MissionLedger {
    /// Empty ledger reading dates from the host's local calendar.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            roster: CrewRoster::default(),
            supplies: SupplyCounter::default(),
            log: MissionLog::default(),
            perishables: PerishableInventory::default(),
            qualifications: QualificationTracker::default(),
            clock: Box::new(clock),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // ── Crew ────────────────────────────────────────────────────────────

    pub fn assign_crew(&mut self, role: &str, name: &str) {
        log::debug!("Crew assigned: {} -> {}", role, name);
        self.roster.assign(role, name);
    }

    pub fn crew_count(&self) -> usize {
        self.roster.count()
    }

    /// Case-insensitive role lookup.
    pub fn find_crew(&self, role: &str) -> Option<&str> {
        self.roster.find_by_role(role)
    }

    pub fn roster(&self) -> &CrewRoster {
        &self.roster
    }

    // ── Supplies ────────────────────────────────────────────────────────

    pub fn set_supply(&mut self, item: &str, quantity: i64) -> Result<()> {
        let quantity = non_negative("quantity", quantity)?;
        log::debug!("Supply set: {} = {}", item, quantity);
        self.supplies.set_quantity(item, quantity);
        Ok(())
    }

    pub fn total_supplies(&self) -> Result<u64> {
        self.supplies.total_count()
    }

    pub fn supplies(&self) -> &SupplyCounter {
        &self.supplies
    }

    // ── Mission log ─────────────────────────────────────────────────────

    pub fn log_event(&mut self, message: &str) {
        log::debug!("Mission log #{}: {}", self.log.len() + 1, message);
        self.log.append(message);
    }

    /// The newest `count` entries, oldest first.
    pub fn recent_logs(&self, count: i64) -> Result<&[String]> {
        let count = non_negative("count", count)?;
        // Anything past usize::MAX already covers the whole log.
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        Ok(self.log.recent(count))
    }

    pub fn mission_log(&self) -> &MissionLog {
        &self.log
    }

    // ── Perishables ─────────────────────────────────────────────────────

    pub fn add_perishable(&mut self, name: &str, offset_days: i64) -> Result<()> {
        let today = self.today();
        self.perishables.add(name, offset_days, today)?;
        log::debug!(
            "Perishable stored: {} (expires {:+} days from {})",
            name,
            offset_days,
            today
        );
        Ok(())
    }

    pub fn perishable_count(&self) -> usize {
        self.perishables.count()
    }

    /// Remove everything past its date and return how many items went.
    pub fn sweep_expired(&mut self) -> usize {
        let today = self.today();
        let removed = self.perishables.remove_expired(today);
        if removed > 0 {
            log::info!(
                "Expiry sweep on {} removed {} item(s), {} remaining",
                today,
                removed,
                self.perishables.count()
            );
        }
        removed
    }

    pub fn perishables(&self) -> &PerishableInventory {
        &self.perishables
    }

    // ── Qualifications ──────────────────────────────────────────────────

    pub fn record_score(&mut self, crew_member: &str, score: i32) {
        log::debug!("Score recorded: {} scored {}", crew_member, score);
        self.qualifications.record_score(crew_member, score);
    }

    pub fn average_score(&self, crew_member: &str) -> f64 {
        self.qualifications.average(crew_member)
    }

    pub fn qualifications(&self) -> &QualificationTracker {
        &self.qualifications
    }

    // ── Fuel ────────────────────────────────────────────────────────────

    pub fn fuel_required(&self, distance_km: f64, efficiency_km_per_unit: f64) -> Result<u64> {
        fuel::fuel_required(distance_km, efficiency_km_per_unit)
    }

    pub fn summary(&self) -> Result<LedgerSummary> {
        let today = self.today();
        Ok(LedgerSummary {
            today,
            crew: self.roster.count(),
            supply_items: self.supplies.len(),
            total_supplies: self.supplies.total_count()?,
            log_entries: self.log.len(),
            perishables: self.perishables.count(),
            expired_perishables: self.perishables.expired_count(today),
            qualified_members: self.qualifications.members().count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2031, 3, 1).unwrap()
    }

    fn ledger() -> MissionLedger {
        MissionLedger::with_clock(FixedClock(day()))
    }

    #[test]
    fn test_negative_supply_rejected_without_mutation() {
        let mut ledger = ledger();
        ledger.set_supply("Oxygen Tanks", 50).unwrap();
        let err = ledger.set_supply("Oxygen Tanks", -1).unwrap_err();
        assert_eq!(err.field(), "quantity");
        assert_eq!(ledger.supplies().quantity("Oxygen Tanks"), Some(50));
    }

    #[test]
    fn test_zero_supply_is_valid() {
        let mut ledger = ledger();
        ledger.set_supply("Spare Parts", 0).unwrap();
        assert_eq!(ledger.supplies().quantity("Spare Parts"), Some(0));
        assert_eq!(ledger.total_supplies(), Ok(0));
    }

    #[test]
    fn test_negative_recent_count_rejected() {
        let mut ledger = ledger();
        ledger.log_event("A");
        let err = ledger.recent_logs(-3).unwrap_err();
        assert_eq!(err.field(), "count");
        assert_eq!(ledger.recent_logs(0).unwrap().len(), 0);
        assert_eq!(ledger.recent_logs(i64::MAX).unwrap(), ["A"]);
    }

    #[test]
    fn test_perishables_use_ledger_clock() {
        let mut ledger = ledger();
        ledger.add_perishable("Ration Pack A", 0).unwrap();
        ledger.add_perishable("Ration Pack B", -1).unwrap();
        assert_eq!(ledger.perishables().items()[0].expires_on, day());
        assert_eq!(ledger.sweep_expired(), 1);
        assert_eq!(ledger.perishable_count(), 1);
    }

    #[test]
    fn test_sub_ledgers_are_independent() {
        let mut ledger = ledger();
        ledger.assign_crew("Medic", "David Kim");
        ledger.record_score("Medic", 80);
        ledger.set_supply("Medic", 3).unwrap();
        assert_eq!(ledger.crew_count(), 1);
        assert_eq!(ledger.average_score("David Kim"), 0.0);
        assert_eq!(ledger.average_score("Medic"), 80.0);
        assert_eq!(ledger.total_supplies(), Ok(3));
        assert_eq!(ledger.perishable_count(), 0);
        assert!(ledger.mission_log().is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let mut ledger = ledger();
        ledger.assign_crew("Pilot", "James Chen");
        ledger.set_supply("Food Rations", 200).unwrap();
        ledger.set_supply("Water Containers", 100).unwrap();
        ledger.log_event("Crew boarding started");
        ledger.add_perishable("Ration Pack C", 30).unwrap();
        ledger.add_perishable("Ration Pack D", -1).unwrap();
        ledger.record_score("Chen", 90);

        let summary = ledger.summary().unwrap();
        assert_eq!(
            summary,
            LedgerSummary {
                today: day(),
                crew: 1,
                supply_items: 2,
                total_supplies: 300,
                log_entries: 1,
                perishables: 2,
                expired_perishables: 1,
                qualified_members: 1,
            }
        );
    }

    #[test]
    fn test_debug_includes_clock_date() {
        let rendered = format!("{:?}", ledger());
        assert!(rendered.contains("2031-03-01"), "{rendered}");
    }
}
