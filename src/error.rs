//! Custom error types for the bank ledger
//!
//! This module defines the error hierarchy for the ledger using thiserror.
//! Every error is returned to the caller; none of them abort the process.

use thiserror::Error;

use crate::models::Money;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Amount must be strictly positive for this operation
    #[error("Invalid amount: {0} (must be greater than zero)")]
    InvalidAmount(Money),

    /// Withdrawal or transfer debit exceeds the account balance
    #[error("Insufficient funds in account '{account}': need {needed}, have {available}")]
    InsufficientFunds {
        account: String,
        needed: Money,
        available: Money,
    },

    /// Operation references an unknown account id
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Create was called with an id that is already in use
    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    /// Reading or writing the backing store failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Malformed user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl LedgerError {
    /// Check if this is an "account not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound(_))
    }

    /// Check if the backing store failed
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
