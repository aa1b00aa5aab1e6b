//! Audit logging for the ledger
//!
//! Every committed create, deposit, withdraw, transfer and delete is appended
//! to a line-delimited JSON log. The log is an operational record only; it
//! is never replayed to rebuild state.
//!
//! # Example
//!
//! ```rust,ignore
//! use bank_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::deposit("A1", Money::from_cents(5000)))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
