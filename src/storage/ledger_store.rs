//! Ledger store for JSON storage
//!
//! Reads and writes the whole account directory, including every account's
//! history, as a single JSON document.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Account;

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of the ledger file
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct LedgerData {
    accounts: Vec<Account>,
}

/// Serializable view used when saving, so the map is not cloned
#[derive(serde::Serialize)]
struct LedgerDataRef<'a> {
    accounts: Vec<&'a Account>,
}

/// File-backed store for the account directory
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every account from disk
    ///
    /// Returns `Ok(None)` when the file does not exist yet. A file that
    /// cannot be read or parsed, that repeats an account id, or whose
    /// balances disagree with their histories is a persistence error.
    pub fn load(&self) -> LedgerResult<Option<BTreeMap<String, Account>>> {
        let Some(file_data) = read_json::<LedgerData, _>(&self.path)? else {
            return Ok(None);
        };

        let mut accounts = BTreeMap::new();
        for account in file_data.accounts {
            account.verify_balance()?;
            let id = account.id().to_string();
            if accounts.insert(id.clone(), account).is_some() {
                return Err(LedgerError::Persistence(format!(
                    "{} lists account '{}' more than once",
                    self.path.display(),
                    id
                )));
            }
        }

        debug!(path = %self.path.display(), count = accounts.len(), "loaded ledger");
        Ok(Some(accounts))
    }

    /// Replace the file with the given accounts
    pub fn save(&self, accounts: &BTreeMap<String, Account>) -> LedgerResult<()> {
        let file_data = LedgerDataRef {
            accounts: accounts.values().collect(),
        };
        write_json_atomic(&self.path, &file_data)?;
        debug!(path = %self.path.display(), count = accounts.len(), "saved ledger");
        Ok(())
    }
}
