//! Perishable supply inventory with expiration tracking.
//!
//! Every operation takes `today` explicitly; the ledger supplies it from its
//! [`Clock`](crate::clock::Clock). An item is expired only when its
//! expiration date is strictly before today, so something expiring today is
//! still good.
//!
//! ```
//! use chrono::NaiveDate;
//! use missionctl_logic::perishables::PerishableInventory;
//!
//! let today = NaiveDate::from_ymd_opt(2031, 3, 1).unwrap();
//! let mut stores = PerishableInventory::default();
//! stores.add("Ration Pack A", 0, today).unwrap();
//! stores.add("Ration Pack B", -5, today).unwrap();
//! assert_eq!(stores.remove_expired(today), 1);
//! assert_eq!(stores.count(), 1);
//! ```

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerishableItem {
    pub name: String,
    pub expires_on: NaiveDate,
}

impl PerishableItem {
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_on < today
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerishableInventory {
    items: Vec<PerishableItem>,
}

impl PerishableInventory {
    /// Store an item expiring `offset_days` after `today`. Negative offsets
    /// record stock that is already past its date.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        offset_days: i64,
        today: NaiveDate,
    ) -> Result<()> {
        let expires_on = TimeDelta::try_days(offset_days)
            .and_then(|delta| today.checked_add_signed(delta))
            .ok_or_else(|| {
                LedgerError::validation(
                    "offset_days",
                    format!("{offset_days} days from {today} is outside the calendar"),
                )
            })?;
        self.items.push(PerishableItem {
            name: name.into(),
            expires_on,
        });
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[PerishableItem] {
        &self.items
    }

    /// How many items a sweep on `today` would remove.
    pub fn expired_count(&self, today: NaiveDate) -> usize {
        self.items.iter().filter(|i| i.is_expired(today)).count()
    }

    /// Drop every expired item and return how many were removed.
    pub fn remove_expired(&mut self, today: NaiveDate) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.is_expired(today));
        before - self.items.len()
    }
}
