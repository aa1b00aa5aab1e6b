//! Storage layer for the ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Only the ledger touches storage; accounts and transactions
//! never do.

pub mod file_io;
pub mod ledger_store;

pub use file_io::{read_json, write_json_atomic};
pub use ledger_store::LedgerStore;
