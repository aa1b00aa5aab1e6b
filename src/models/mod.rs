//! Core data models for the ledger
//!
//! Money amounts, transaction records and accounts. Accounts own their
//! history; nothing outside an account can append to or edit it.

pub mod account;
pub mod money;
pub mod transaction;

pub use account::Account;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
