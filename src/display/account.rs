//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::config::Settings;
use crate::models::{Account, Money};

/// Format all accounts as a table with a total row
pub fn format_account_list<'a, I>(accounts: I, settings: &Settings) -> String
where
    I: IntoIterator<Item = &'a Account>,
{
    let accounts: Vec<&Account> = accounts.into_iter().collect();
    if accounts.is_empty() {
        return "No accounts available.\n".to_string();
    }

    let symbol = settings.currency_symbol.as_str();

    let id_width = accounts
        .iter()
        .map(|a| a.id().chars().count())
        .max()
        .unwrap_or(2)
        .max(2);
    let name_width = accounts
        .iter()
        .map(|a| a.holder_name().chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<name_width$}  {:>14}  {:>7}\n",
        "ID", "Holder", "Balance", "Entries",
    ));
    let separator = format!(
        "{:-<id_width$}  {:-<name_width$}  {:->14}  {:->7}\n",
        "", "", "", "",
    );
    output.push_str(&separator);

    for account in &accounts {
        output.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {:>14}  {:>7}\n",
            account.id(),
            account.holder_name(),
            account.balance().format_with_symbol(symbol),
            account.history().len(),
        ));
    }

    let total = match Money::checked_sum(accounts.iter().map(|a| a.balance())) {
        Some(total) => total.format_with_symbol(symbol),
        None => "(overflow)".to_string(),
    };
    output.push_str(&separator);
    output.push_str(&format!(
        "{:<id_width$}  {:<name_width$}  {:>14}\n",
        "TOTAL", "", total,
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Account Number: {}\n", account.id()));
    output.push_str(&format!("Holder Name:    {}\n", account.holder_name()));
    output.push_str(&format!(
        "Balance:        {}\n",
        account.balance().format_with_symbol(&settings.currency_symbol)
    ));
    output
}
