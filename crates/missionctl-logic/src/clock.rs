//! Calendar source for expiry decisions.
//!
//! Perishable expiry only cares about whole days, so the clock hands out a
//! [`NaiveDate`] rather than an instant.

use chrono::{Local, NaiveDate};

/// Provides "today" to date-sensitive sub-ledgers.
pub trait Clock: Send {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date. Used by tests and scenario replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
