//! Balance-changing CLI commands and history view

use crate::config::Settings;
use crate::display::transaction::format_history;
use crate::error::{LedgerError, LedgerResult};
use crate::services::Ledger;

use super::parse_amount;

pub fn deposit(
    ledger: &mut Ledger,
    settings: &Settings,
    id: &str,
    amount: &str,
) -> LedgerResult<String> {
    let amount = parse_amount(amount)?;
    ledger.deposit(id, amount)?;
    Ok(format!(
        "Deposited: {}",
        amount.format_with_symbol(&settings.currency_symbol)
    ))
}

pub fn withdraw(
    ledger: &mut Ledger,
    settings: &Settings,
    id: &str,
    amount: &str,
) -> LedgerResult<String> {
    let amount = parse_amount(amount)?;
    ledger.withdraw(id, amount)?;
    Ok(format!(
        "Withdrawn: {}",
        amount.format_with_symbol(&settings.currency_symbol)
    ))
}

pub fn transfer(
    ledger: &mut Ledger,
    settings: &Settings,
    from: &str,
    to: &str,
    amount: &str,
) -> LedgerResult<String> {
    let amount = parse_amount(amount)?;
    ledger.transfer(from, to, amount)?;

    let target = ledger
        .lookup(to)
        .ok_or_else(|| LedgerError::AccountNotFound(to.to_string()))?;
    Ok(format!(
        "Transferred {} to {}",
        amount.format_with_symbol(&settings.currency_symbol),
        target.holder_name()
    ))
}

pub fn show_history(ledger: &Ledger, settings: &Settings, id: &str) -> LedgerResult<String> {
    let account = ledger
        .lookup(id)
        .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))?;
    Ok(format_history(account, settings))
}
