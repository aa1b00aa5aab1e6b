//! CLI command handlers
//!
//! Bridges clap argument parsing and the interactive menu with the ledger.
//! Handlers return the status text to print; errors go back to the caller.

pub mod account;
pub mod menu;
pub mod transaction;

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::services::Ledger;

pub use menu::run_menu;

/// Ledger subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new account
    Create {
        /// Account number
        id: String,
        /// Account holder name
        holder: String,
        /// Opening balance (e.g., "100.00" or "100")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
    },
    /// Deposit into an account
    Deposit {
        /// Account number
        id: String,
        /// Amount to deposit
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Withdraw from an account
    Withdraw {
        /// Account number
        id: String,
        /// Amount to withdraw
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Transfer funds between accounts
    Transfer {
        /// Source account number
        from: String,
        /// Destination account number
        to: String,
        /// Amount to transfer
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Show an account's balance
    Balance {
        /// Account number
        id: String,
    },
    /// Show an account's transaction history
    History {
        /// Account number
        id: String,
    },
    /// Show account number, holder and balance
    Show {
        /// Account number
        id: String,
    },
    /// List all accounts
    #[command(alias = "ls")]
    List,
    /// Delete an account
    Delete {
        /// Account number
        id: String,
    },
    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show current configuration and paths
    Config,
    /// Run the interactive menu (default)
    Menu,
}

/// Run one ledger command and return its status text
///
/// `Config` and `Menu` need the process environment and are handled by the
/// binary itself.
pub fn handle_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: Command,
) -> LedgerResult<String> {
    match cmd {
        Command::Create {
            id,
            holder,
            balance,
        } => account::create_account(ledger, &id, &holder, &balance),
        Command::Deposit { id, amount } => transaction::deposit(ledger, settings, &id, &amount),
        Command::Withdraw { id, amount } => transaction::withdraw(ledger, settings, &id, &amount),
        Command::Transfer { from, to, amount } => {
            transaction::transfer(ledger, settings, &from, &to, &amount)
        }
        Command::Balance { id } => account::show_balance(ledger, settings, &id),
        Command::History { id } => transaction::show_history(ledger, settings, &id),
        Command::Show { id } => account::show_account(ledger, settings, &id),
        Command::List => Ok(account::list_accounts(ledger, settings)),
        Command::Delete { id } => account::delete_account(ledger, &id),
        Command::Log { limit } => show_audit_log(ledger, limit),
        Command::Config | Command::Menu => Err(LedgerError::Validation(
            "this command is not handled by the ledger".into(),
        )),
    }
}

fn show_audit_log(ledger: &Ledger, limit: usize) -> LedgerResult<String> {
    let Some(audit) = ledger.audit() else {
        return Ok("Audit log is disabled.".to_string());
    };

    let entries = audit.read_recent(limit)?;
    if entries.is_empty() {
        return Ok("No audit entries.".to_string());
    }

    Ok(entries
        .iter()
        .map(|e| e.format_human_readable())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Parse a user-entered amount
pub(crate) fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount '{}'. Use format like '100.00' or '100'. Error: {}",
            input.trim(),
            e
        ))
    })
}
