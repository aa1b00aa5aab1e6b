//! Bank ledger - single-process account ledger with file persistence
//!
//! Tracks named accounts, each with a balance and an append-only transaction
//! history, and supports deposits, withdrawals, transfers and account
//! lifecycle operations. The whole account directory is rewritten to a JSON
//! file after every change and reloaded at startup.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, transaction records and accounts
//! - `storage`: JSON file storage layer
//! - `services`: The ledger (account directory and persistence policy)
//! - `audit`: Append-only audit log of committed operations
//! - `display`: Terminal formatting
//! - `cli`: Subcommand handlers and the interactive menu
//!
//! # Example
//!
//! ```no_run
//! use bank_ledger::models::Money;
//! use bank_ledger::services::Ledger;
//! use bank_ledger::storage::LedgerStore;
//!
//! let mut ledger = Ledger::open(LedgerStore::new("ledger.json".into()));
//! ledger.create("A1", "Alice", Money::from_units(100, 0))?;
//! ledger.deposit("A1", Money::from_units(50, 0))?;
//! assert_eq!(ledger.balance("A1")?, Money::from_units(150, 0));
//! # Ok::<(), bank_ledger::LedgerError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
