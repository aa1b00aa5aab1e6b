//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Ledger operations that are recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Deposit,
    Withdraw,
    Transfer,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Deposit => write!(f, "DEPOSIT"),
            Operation::Withdraw => write!(f, "WITHDRAW"),
            Operation::Transfer => write!(f, "TRANSFER"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation was committed (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Account the operation was applied to (the source for transfers)
    pub account_id: String,

    /// Receiving account for transfers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty_id: Option<String>,

    /// Amount moved, or the opening balance for creates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
}

impl AuditEntry {
    fn new(operation: Operation, account_id: impl Into<String>, amount: Option<Money>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            account_id: account_id.into(),
            counterparty_id: None,
            amount,
        }
    }

    pub fn create(account_id: impl Into<String>, initial_balance: Money) -> Self {
        Self::new(Operation::Create, account_id, Some(initial_balance))
    }

    pub fn deposit(account_id: impl Into<String>, amount: Money) -> Self {
        Self::new(Operation::Deposit, account_id, Some(amount))
    }

    pub fn withdraw(account_id: impl Into<String>, amount: Money) -> Self {
        Self::new(Operation::Withdraw, account_id, Some(amount))
    }

    pub fn transfer(from: impl Into<String>, to: impl Into<String>, amount: Money) -> Self {
        let mut entry = Self::new(Operation::Transfer, from, Some(amount));
        entry.counterparty_id = Some(to.into());
        entry
    }

    pub fn delete(account_id: impl Into<String>) -> Self {
        Self::new(Operation::Delete, account_id, None)
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.account_id
        );

        if let Some(to) = &self.counterparty_id {
            output.push_str(&format!(" -> {}", to));
        }
        if let Some(amount) = self.amount {
            output.push_str(&format!(" {}", amount));
        }

        output
    }
}
