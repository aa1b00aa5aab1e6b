//! Transaction record model
//!
//! A transaction is an immutable fact about one balance-affecting event on
//! a single account. The timestamp is captured at construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// What kind of event a transaction records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Opening balance recorded when the account is created
    InitialDeposit,
    Deposit,
    Withdraw,
    /// Debit leg of a transfer
    TransferOut,
    /// Credit leg of a transfer
    TransferIn,
}

impl TransactionKind {
    /// Returns true if this kind increases the balance
    pub fn is_credit(&self) -> bool {
        matches!(
            self,
            Self::InitialDeposit | Self::Deposit | Self::TransferIn
        )
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitialDeposit => write!(f, "Initial Deposit"),
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdraw => write!(f, "Withdraw"),
            Self::TransferOut => write!(f, "Transfer Out"),
            Self::TransferIn => write!(f, "Transfer In"),
        }
    }
}

/// A single entry in an account's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Money,
    timestamp: DateTime<Utc>,
    /// Holder name on the other side of a transfer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    counterparty: Option<String>,
}

impl Transaction {
    /// Create a new transaction stamped with the current time
    pub fn new(kind: TransactionKind, amount: Money) -> Self {
        Self {
            kind,
            amount,
            timestamp: Utc::now(),
            counterparty: None,
        }
    }

    /// Create a transfer leg tagged with the other party's holder name
    pub fn with_counterparty(
        kind: TransactionKind,
        amount: Money,
        counterparty: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(kind, amount);
        txn.counterparty = Some(counterparty.into());
        txn
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn counterparty(&self) -> Option<&str> {
        self.counterparty.as_deref()
    }

    pub fn is_credit(&self) -> bool {
        self.kind.is_credit()
    }

    /// Amount with its effect on the balance: positive for credits,
    /// negative for debits. None if a debit amount cannot be negated.
    pub fn signed_amount(&self) -> Option<Money> {
        if self.is_credit() {
            Some(self.amount)
        } else {
            self.amount.checked_neg()
        }
    }

    /// Short label such as "Deposit" or "Transfer to Bob"
    pub fn description(&self) -> String {
        match (self.kind, self.counterparty()) {
            (TransactionKind::TransferOut, Some(name)) => format!("Transfer to {}", name),
            (TransactionKind::TransferIn, Some(name)) => format!("Transfer from {}", name),
            (kind, _) => kind.to_string(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} : {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.description(),
            self.amount
        )
    }
}
