//! Transaction history formatting

use crate::config::Settings;
use crate::models::{Account, Transaction};

/// Format one history row: "{timestamp} - {description} : {amount}"
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{} - {} : {}",
        txn.timestamp().format(&settings.date_format),
        txn.description(),
        txn.amount().format_with_symbol(&settings.currency_symbol)
    )
}

/// Format an account's full history, oldest first
pub fn format_history(account: &Account, settings: &Settings) -> String {
    let mut output = format!("Transaction History for {}:\n", account.holder_name());
    for txn in account.history() {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_history_in_order() {
        let mut alice = Account::open("A1", "Alice", Money::from_cents(10000));
        let mut bob = Account::open("A2", "Bob", Money::zero());
        alice.deposit(Money::from_cents(5000)).unwrap();
        alice.transfer(&mut bob, Money::from_cents(2500)).unwrap();

        let output = format_history(&alice, &Settings::default());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Transaction History for Alice:");
        assert!(lines[1].ends_with(" - Initial Deposit : $100.00"));
        assert!(lines[2].ends_with(" - Deposit : $50.00"));
        assert!(lines[3].ends_with(" - Transfer to Bob : $25.00"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_row_uses_configured_date_format() {
        let account = Account::open("A1", "Alice", Money::from_cents(1));
        let settings = Settings {
            date_format: "%Y".to_string(),
            ..Settings::default()
        };

        let txn = &account.history()[0];
        let row = format_transaction_row(txn, &settings);
        assert_eq!(
            row,
            format!("{} - Initial Deposit : $0.01", txn.timestamp().format("%Y"))
        );
    }
}
