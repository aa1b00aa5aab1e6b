//! Service layer for the ledger
//!
//! Business logic on top of the storage layer: id resolution, validation,
//! and persisting after every change.

pub mod ledger;

pub use ledger::{Ledger, RestoreOutcome};
