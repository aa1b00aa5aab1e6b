//! Ledger service
//!
//! The ledger is the account directory: it owns every account, resolves ids,
//! delegates balance changes to the account, and rewrites the whole store
//! after each successful mutation.

use std::collections::BTreeMap;

use tracing::{debug, error, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Money, Transaction};
use crate::storage::LedgerStore;

/// What `restore` found in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// The store does not exist yet
    NoData,
    /// The store was read successfully
    Loaded { accounts: usize },
}

/// In-memory account directory backed by a [`LedgerStore`]
#[derive(Debug)]
pub struct Ledger {
    accounts: BTreeMap<String, Account>,
    store: LedgerStore,
    audit: Option<AuditLogger>,
}

impl Ledger {
    /// Create an empty ledger without reading the store
    pub fn empty(store: LedgerStore) -> Self {
        Self {
            accounts: BTreeMap::new(),
            store,
            audit: None,
        }
    }

    /// Load the ledger from its store
    ///
    /// A missing store gives an empty ledger. A store that cannot be read is
    /// logged as an error and also gives an empty ledger; the process keeps
    /// running.
    pub fn open(store: LedgerStore) -> Self {
        let mut ledger = Self::empty(store);
        let path = ledger.store.path().display().to_string();

        match ledger.restore() {
            Ok(RestoreOutcome::NoData) => {
                info!(%path, "no previous data found, starting fresh");
            }
            Ok(RestoreOutcome::Loaded { accounts }) => {
                info!(%path, accounts, "ledger loaded");
            }
            Err(e) => {
                error!(%path, error = %e, "failed to load ledger, continuing with no accounts");
            }
        }

        ledger
    }

    /// Record committed operations in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Replace the in-memory accounts with the store's contents
    ///
    /// On error the ledger is left empty.
    pub fn restore(&mut self) -> LedgerResult<RestoreOutcome> {
        self.accounts.clear();
        match self.store.load()? {
            Some(accounts) => {
                self.accounts = accounts;
                Ok(RestoreOutcome::Loaded {
                    accounts: self.accounts.len(),
                })
            }
            None => Ok(RestoreOutcome::NoData),
        }
    }

    /// Write every account to the store
    pub fn persist(&self) -> LedgerResult<()> {
        self.store.save(&self.accounts)
    }

    /// Open a new account seeded with an InitialDeposit record
    pub fn create(
        &mut self,
        id: &str,
        holder_name: &str,
        initial_balance: Money,
    ) -> LedgerResult<&Account> {
        let holder_name = holder_name.trim();
        if id.trim().is_empty() {
            return Err(LedgerError::Validation("Account id cannot be empty".into()));
        }
        // Ids are matched exactly, so surrounding spaces would be unreachable
        if id.trim() != id {
            return Err(LedgerError::Validation(format!(
                "Account id '{}' cannot start or end with whitespace",
                id
            )));
        }
        if holder_name.is_empty() {
            return Err(LedgerError::Validation("Holder name cannot be empty".into()));
        }
        if self.accounts.contains_key(id) {
            return Err(LedgerError::DuplicateAccount(id.to_string()));
        }

        let account = Account::open(id, holder_name, initial_balance);
        self.accounts.insert(id.to_string(), account);
        self.commit(AuditEntry::create(id, initial_balance))?;

        self.get(id)
    }

    /// Remove an account and return it
    pub fn delete(&mut self, id: &str) -> LedgerResult<Account> {
        let account = self
            .accounts
            .remove(id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))?;

        self.commit(AuditEntry::delete(id))?;
        Ok(account)
    }

    pub fn lookup(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// All accounts, ordered by id
    pub fn list_all(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn balance(&self, id: &str) -> LedgerResult<Money> {
        self.get(id).map(Account::balance)
    }

    pub fn history(&self, id: &str) -> LedgerResult<&[Transaction]> {
        self.get(id).map(Account::history)
    }

    /// Deposit into an account
    pub fn deposit(&mut self, id: &str, amount: Money) -> LedgerResult<&Account> {
        self.get_mut(id)?.deposit(amount)?;
        self.commit(AuditEntry::deposit(id, amount))?;
        self.get(id)
    }

    /// Withdraw from an account
    pub fn withdraw(&mut self, id: &str, amount: Money) -> LedgerResult<&Account> {
        self.get_mut(id)?.withdraw(amount)?;
        self.commit(AuditEntry::withdraw(id, amount))?;
        self.get(id)
    }

    /// Move funds between two distinct accounts
    ///
    /// Either both sides change or neither does.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Money) -> LedgerResult<()> {
        if from == to {
            return Err(LedgerError::Validation(
                "Cannot transfer to the same account".into(),
            ));
        }

        // Take the source out so both sides can be borrowed mutably
        let mut source = self
            .accounts
            .remove(from)
            .ok_or_else(|| LedgerError::AccountNotFound(from.to_string()))?;

        let result = match self.accounts.get_mut(to) {
            Some(target) => source.transfer(target, amount),
            None => Err(LedgerError::AccountNotFound(to.to_string())),
        };
        self.accounts.insert(from.to_string(), source);
        result?;

        self.commit(AuditEntry::transfer(from, to, amount))
    }

    fn get(&self, id: &str) -> LedgerResult<&Account> {
        self.accounts
            .get(id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> LedgerResult<&mut Account> {
        self.accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))
    }

    /// Persist after a mutation, then record it in the audit log
    ///
    /// A persist failure is returned without undoing the in-memory change.
    /// Audit failures are only logged.
    fn commit(&self, entry: AuditEntry) -> LedgerResult<()> {
        if let Err(e) = self.persist() {
            error!(
                operation = %entry.operation,
                account = %entry.account_id,
                error = %e,
                "ledger change applied in memory but not saved"
            );
            return Err(e);
        }
        debug!(operation = %entry.operation, account = %entry.account_id, "ledger saved");

        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log(&entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
        Ok(())
    }
}
