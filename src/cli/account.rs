//! Account CLI commands
//!
//! Create, inspect, list and delete accounts.

use crate::config::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::LedgerResult;
use crate::services::Ledger;

use super::parse_amount;

/// Open an account with an optional opening balance
pub fn create_account(
    ledger: &mut Ledger,
    id: &str,
    holder_name: &str,
    initial_balance: &str,
) -> LedgerResult<String> {
    let initial_balance = parse_amount(initial_balance)?;
    ledger.create(id, holder_name, initial_balance)?;
    Ok("Account created successfully!".to_string())
}

pub fn show_balance(ledger: &Ledger, settings: &Settings, id: &str) -> LedgerResult<String> {
    let balance = ledger.balance(id)?;
    Ok(format!(
        "Balance: {}",
        balance.format_with_symbol(&settings.currency_symbol)
    ))
}

/// Show id, holder and balance for one account
pub fn show_account(ledger: &Ledger, settings: &Settings, id: &str) -> LedgerResult<String> {
    let account = ledger
        .lookup(id)
        .ok_or_else(|| crate::error::LedgerError::AccountNotFound(id.to_string()))?;
    Ok(format_account_details(account, settings))
}

pub fn list_accounts(ledger: &Ledger, settings: &Settings) -> String {
    format_account_list(ledger.list_all(), settings)
}

pub fn delete_account(ledger: &mut Ledger, id: &str) -> LedgerResult<String> {
    ledger.delete(id)?;
    Ok("Account deleted successfully.".to_string())
}
