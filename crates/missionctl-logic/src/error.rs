//! Error types for ledger operations.
//!
//! Only bad input is an error. Lookups that find nothing return `None`
//! (or a documented default such as `0.0` for an empty score history).

/// Errors surfaced by [`crate::ledger::MissionLedger`] and the pure helpers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    /// An input was outside the range the operation accepts.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
}

impl LedgerError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Validation { field, .. } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
