//! Mission record keeping for MissionCtl.
//!
//! This crate holds the in-memory ledger and nothing else. Functions take
//! plain data and return results; there is no I/O, no threads and no global
//! state, so one [`ledger::MissionLedger`] is built per session or test run.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`clock`] | `Clock` trait, system and fixed calendar sources |
//! | [`error`] | `LedgerError` and the crate `Result` alias |
//! | [`fuel`] | Round-up fuel planning for a voyage leg |
//! | [`ledger`] | `MissionLedger` facade over every sub-ledger |
//! | [`mission_log`] | Append-only event log, recent-entry queries |
//! | [`perishables`] | Perishable stock with expiry sweep |
//! | [`qualifications`] | Per-member score history and averages |
//! | [`roster`] | Case-insensitive role → crew member roster |
//! | [`supplies`] | Per-item supply quantities and totals |

pub mod clock;
pub mod error;
pub mod fuel;
pub mod ledger;
pub mod mission_log;
pub mod perishables;
pub mod qualifications;
pub mod roster;
pub mod supplies;

pub use error::{LedgerError, Result};
pub use ledger::{LedgerSummary, MissionLedger};
