//! Append-only mission log.
//!
//! Entries are kept oldest first and are never reordered or removed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionLog {
    entries: Vec<String>,
}

impl MissionLog {
    pub fn append(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
    }

    /// The last `min(n, len)` entries, oldest of the selection first.
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
