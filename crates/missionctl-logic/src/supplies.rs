//! Supply counter: on-hand quantity per item type.
//!
//! Setting an item again overwrites its quantity; it does not add to it.
//! The total is summed over every stored item.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplyCounter {
    quantities: BTreeMap<String, u64>,
}

impl SupplyCounter {
    /// Insert or overwrite the quantity on hand for `item`.
    pub fn set_quantity(&mut self, item: impl Into<String>, quantity: u64) {
        self.quantities.insert(item.into(), quantity);
    }

    pub fn quantity(&self, item: &str) -> Option<u64> {
        self.quantities.get(item).copied()
    }

    /// Number of distinct item types.
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Sum of quantities across all item types.
    pub fn total_count(&self) -> Result<u64> {
        self.quantities.values().try_fold(0u64, |total, &qty| {
            total.checked_add(qty).ok_or_else(|| {
                LedgerError::validation("quantity", "total supply count overflows u64")
            })
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.quantities.iter().map(|(item, qty)| (item.as_str(), *qty))
    }
}
