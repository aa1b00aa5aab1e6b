//! Account model
//!
//! An account holds a balance and the ordered history of transactions that
//! produced it. Every balance change appends exactly one record per side.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::transaction::{Transaction, TransactionKind};
use crate::error::{LedgerError, LedgerResult};

/// A named holder of a balance and its transaction history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: String,
    holder_name: String,
    balance: Money,
    history: Vec<Transaction>,
}

impl Account {
    /// Open an account seeded with one InitialDeposit record
    ///
    /// The opening balance is taken as given, including zero or negative
    /// values.
    pub fn open(
        id: impl Into<String>,
        holder_name: impl Into<String>,
        initial_balance: Money,
    ) -> Self {
        Self {
            id: id.into(),
            holder_name: holder_name.into(),
            balance: initial_balance,
            history: vec![Transaction::new(
                TransactionKind::InitialDeposit,
                initial_balance,
            )],
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Read-only view of the history, oldest first
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Deposit a positive amount
    pub fn deposit(&mut self, amount: Money) -> LedgerResult<&Transaction> {
        let new_balance = self.credited(amount)?;
        Ok(self.apply(new_balance, Transaction::new(TransactionKind::Deposit, amount)))
    }

    /// Withdraw a positive amount not exceeding the balance
    pub fn withdraw(&mut self, amount: Money) -> LedgerResult<&Transaction> {
        self.check_debit(amount)?;
        let new_balance = self.balance - amount;
        Ok(self.apply(new_balance, Transaction::new(TransactionKind::Withdraw, amount)))
    }

    /// Move funds to another account
    ///
    /// Validation happens against this account only, and before either side
    /// is touched. On success this account gains one TransferOut record and
    /// `target` gains one TransferIn record.
    pub fn transfer(&mut self, target: &mut Account, amount: Money) -> LedgerResult<()> {
        self.check_debit(amount)?;
        let target_balance = target.credited(amount)?;

        let debit = Transaction::with_counterparty(
            TransactionKind::TransferOut,
            amount,
            target.holder_name.clone(),
        );
        let credit = Transaction::with_counterparty(
            TransactionKind::TransferIn,
            amount,
            self.holder_name.clone(),
        );

        let source_balance = self.balance - amount;
        self.apply(source_balance, debit);
        target.apply(target_balance, credit);
        Ok(())
    }

    /// Recompute the balance from history; None if a partial total overflows
    pub fn history_total(&self) -> Option<Money> {
        self.history
            .iter()
            .try_fold(Money::zero(), |total, txn| total.checked_add(txn.signed_amount()?))
    }

    /// Check a loaded account against the rules every mutation upholds
    ///
    /// Only the opening record may carry a non-positive amount, and the
    /// stored balance must equal the history total.
    pub fn verify_balance(&self) -> LedgerResult<()> {
        let later = match self.history.first() {
            Some(first) if first.kind() == TransactionKind::InitialDeposit => &self.history[1..],
            _ => &self.history[..],
        };
        if let Some(bad) = later.iter().find(|txn| {
            txn.kind() == TransactionKind::InitialDeposit || !txn.amount().is_positive()
        }) {
            return Err(LedgerError::Persistence(format!(
                "account '{}' has an invalid {} record of {}",
                self.id,
                bad.kind(),
                bad.amount()
            )));
        }

        let computed = self.history_total().ok_or_else(|| {
            LedgerError::Persistence(format!(
                "account '{}' history total is out of range",
                self.id
            ))
        })?;
        if computed != self.balance {
            return Err(LedgerError::Persistence(format!(
                "account '{}' balance {} does not match history total {}",
                self.id, self.balance, computed
            )));
        }
        Ok(())
    }

    fn check_debit(&self, amount: Money) -> LedgerResult<()> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                account: self.id.clone(),
                needed: amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    /// Balance after crediting `amount`, without applying it
    fn credited(&self, amount: Money) -> LedgerResult<Money> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        self.balance.checked_add(amount).ok_or_else(|| {
            LedgerError::Validation(format!(
                "deposit of {} would overflow the balance of account '{}'",
                amount, self.id
            ))
        })
    }

    fn apply(&mut self, new_balance: Money, record: Transaction) -> &Transaction {
        self.balance = new_balance;
        self.history.push(record);
        &self.history[self.history.len() - 1]
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.holder_name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(units: i64) -> Money {
        Money::from_units(units, 0)
    }

    #[test]
    fn test_open_seeds_initial_deposit() {
        let account = Account::open("A1", "Alice", dollars(100));
        assert_eq!(account.id(), "A1");
        assert_eq!(account.holder_name(), "Alice");
        assert_eq!(account.balance(), dollars(100));
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.history()[0].kind(), TransactionKind::InitialDeposit);
        assert_eq!(account.history()[0].amount(), dollars(100));
    }

    #[test]
    fn test_open_accepts_negative_balance() {
        let account = Account::open("A1", "Alice", dollars(-20));
        assert_eq!(account.balance(), dollars(-20));
        assert!(account.verify_balance().is_ok());
    }

    #[test]
    fn test_deposit() {
        let mut account = Account::open("A1", "Alice", dollars(100));
        let txn = account.deposit(dollars(50)).unwrap();
        assert_eq!(txn.kind(), TransactionKind::Deposit);
        assert_eq!(account.balance(), dollars(150));
        assert_eq!(account.history().len(), 2);
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = Account::open("A1", "Alice", dollars(100));
        for amount in [Money::zero(), dollars(-5)] {
            let err = account.deposit(amount).unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAmount(a) if a == amount));
        }
        assert_eq!(account.balance(), dollars(100));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_withdraw() {
        let mut account = Account::open("A1", "Alice", dollars(100));
        account.withdraw(dollars(100)).unwrap();
        assert_eq!(account.balance(), Money::zero());
        assert_eq!(account.history()[1].kind(), TransactionKind::Withdraw);
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut account = Account::open("A1", "Alice", dollars(150));
        let err = account.withdraw(dollars(200)).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InsufficientFunds { needed, available, .. }
                if needed == dollars(200) && available == dollars(150)
        ));
        assert_eq!(account.balance(), dollars(150));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_withdraw_rejects_non_positive() {
        let mut account = Account::open("A1", "Alice", dollars(10));
        assert!(matches!(
            account.withdraw(Money::zero()),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_transfer_records_one_entry_per_side() {
        let mut alice = Account::open("A1", "Alice", dollars(150));
        let mut bob = Account::open("A2", "Bob", Money::zero());

        alice.transfer(&mut bob, dollars(100)).unwrap();

        assert_eq!(alice.balance(), dollars(50));
        assert_eq!(bob.balance(), dollars(100));
        assert_eq!(alice.history().len(), 2);
        assert_eq!(bob.history().len(), 2);

        let out = &alice.history()[1];
        assert_eq!(out.kind(), TransactionKind::TransferOut);
        assert_eq!(out.counterparty(), Some("Bob"));
        let inbound = &bob.history()[1];
        assert_eq!(inbound.kind(), TransactionKind::TransferIn);
        assert_eq!(inbound.counterparty(), Some("Alice"));
    }

    #[test]
    fn test_failed_transfer_touches_neither_side() {
        let mut alice = Account::open("A1", "Alice", dollars(10));
        let mut bob = Account::open("A2", "Bob", dollars(5));

        assert!(matches!(
            alice.transfer(&mut bob, dollars(11)),
            Err(LedgerError::InsufficientFunds { .. })
        ));
        assert!(matches!(
            alice.transfer(&mut bob, dollars(-1)),
            Err(LedgerError::InvalidAmount(_))
        ));

        assert_eq!(alice.balance(), dollars(10));
        assert_eq!(bob.balance(), dollars(5));
        assert_eq!(alice.history().len(), 1);
        assert_eq!(bob.history().len(), 1);
    }

    #[test]
    fn test_balance_matches_history_after_mixed_operations() {
        let mut alice = Account::open("A1", "Alice", dollars(100));
        let mut bob = Account::open("A2", "Bob", dollars(20));

        alice.deposit(Money::from_cents(1234)).unwrap();
        alice.withdraw(Money::from_cents(999)).unwrap();
        alice.transfer(&mut bob, dollars(30)).unwrap();
        bob.transfer(&mut alice, dollars(5)).unwrap();
        let _ = alice.withdraw(dollars(1_000));

        assert_eq!(alice.history_total(), Some(alice.balance()));
        assert_eq!(bob.history_total(), Some(bob.balance()));
        assert!(alice.verify_balance().is_ok());
        assert!(bob.verify_balance().is_ok());
    }

    #[test]
    fn test_verify_balance_detects_mismatch() {
        let json = r#"{"id":"A1","holder_name":"Alice","balance":999,"history":[]}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert!(matches!(
            account.verify_balance(),
            Err(LedgerError::Persistence(_))
        ));
    }

    fn loaded(history: &str, balance: i64) -> Account {
        let json = format!(
            r#"{{"id":"A1","holder_name":"Alice","balance":{},"history":[{}]}}"#,
            balance, history
        );
        serde_json::from_str(&json).unwrap()
    }

    fn record(kind: &str, cents: i64) -> String {
        format!(
            r#"{{"kind":"{}","amount":{},"timestamp":"2024-01-01T00:00:00Z"}}"#,
            kind, cents
        )
    }

    #[test]
    fn test_verify_balance_accepts_negative_opening() {
        let history = [record("initial_deposit", -500), record("deposit", 200)].join(",");
        assert!(loaded(&history, -300).verify_balance().is_ok());
    }

    #[test]
    fn test_verify_balance_rejects_non_positive_records() {
        for (kind, cents) in [("deposit", -500), ("withdraw", 0), ("transfer_in", -1)] {
            let history = [record("initial_deposit", 0), record(kind, cents)].join(",");
            let account = loaded(&history, if kind == "withdraw" { 0 } else { cents });
            assert!(
                matches!(account.verify_balance(), Err(LedgerError::Persistence(_))),
                "{} of {} was accepted",
                kind,
                cents
            );
        }
    }

    #[test]
    fn test_verify_balance_rejects_second_opening_record() {
        let history = [record("initial_deposit", 100), record("initial_deposit", 100)].join(",");
        assert!(matches!(
            loaded(&history, 200).verify_balance(),
            Err(LedgerError::Persistence(_))
        ));
    }

    #[test]
    fn test_verify_balance_overflowing_history_is_an_error() {
        let history = [
            record("initial_deposit", 0),
            record("deposit", i64::MAX),
            record("deposit", i64::MAX),
        ]
        .join(",");
        let account = loaded(&history, 0);

        assert_eq!(account.history_total(), None);
        assert!(matches!(
            account.verify_balance(),
            Err(LedgerError::Persistence(_))
        ));
    }

    #[test]
    fn test_deposit_overflow_is_rejected() {
        let mut account = Account::open("A1", "Alice", Money::from_cents(i64::MAX));
        assert!(matches!(
            account.deposit(Money::from_cents(1)),
            Err(LedgerError::Validation(_))
        ));
        assert_eq!(account.balance(), Money::from_cents(i64::MAX));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_transfer_overflowing_target_touches_neither_side() {
        let mut alice = Account::open("A1", "Alice", dollars(10));
        let mut bob = Account::open("A2", "Bob", Money::from_cents(i64::MAX));

        assert!(matches!(
            alice.transfer(&mut bob, dollars(1)),
            Err(LedgerError::Validation(_))
        ));
        assert_eq!(alice.balance(), dollars(10));
        assert_eq!(bob.balance(), Money::from_cents(i64::MAX));
        assert_eq!(alice.history().len(), 1);
        assert_eq!(bob.history().len(), 1);
    }

    #[test]
    fn test_serialization_preserves_history_order() {
        let mut account = Account::open("A1", "Alice", dollars(1));
        account.deposit(dollars(2)).unwrap();
        account.withdraw(dollars(3)).unwrap();

        let json = serde_json::to_string(&account).unwrap();
        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);
    }

    #[test]
    fn test_display() {
        let account = Account::open("A1", "Alice", Money::zero());
        assert_eq!(account.to_string(), "Alice (A1)");
    }
}
