//! Crew roster: one name per role.
//!
//! Role lookups are case-insensitive: radio traffic garbles capitalization,
//! so "Engineer", "engineer" and "ENGINEER" all name the same seat. Keys are
//! folded to lowercase on both write and read; the role text from the most
//! recent assignment is kept for display.
//!
//! ```
//! use missionctl_logic::roster::CrewRoster;
//!
//! let mut roster = CrewRoster::default();
//! roster.assign("Engineer", "Aisha Patel");
//! assert_eq!(roster.find_by_role("engineer"), Some("Aisha Patel"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single role → name binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewAssignment {
    /// Role as written by the most recent assignment.
    pub role: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrewRoster {
    assignments: BTreeMap<String, CrewAssignment>,
}

fn fold_role(role: &str) -> String {
    role.to_lowercase()
}

impl CrewRoster {
    /// Bind `name` to `role`, replacing any earlier assignment to the same
    /// role regardless of its capitalization.
    pub fn assign(&mut self, role: impl Into<String>, name: impl Into<String>) {
        let role = role.into();
        let assignment = CrewAssignment {
            role: role.clone(),
            name: name.into(),
        };
        self.assignments.insert(fold_role(&role), assignment);
    }

    /// Number of distinct roles currently filled.
    pub fn count(&self) -> usize {
        self.assignments.len()
    }

    pub fn find_by_role(&self, role: &str) -> Option<&str> {
        self.assignments
            .get(&fold_role(role))
            .map(|a| a.name.as_str())
    }

    /// Assignments ordered by folded role.
    pub fn iter(&self) -> impl Iterator<Item = &CrewAssignment> {
        self.assignments.values()
    }
}
