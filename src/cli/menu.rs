//! Interactive numbered menu
//!
//! Reads one field per line. Every error is printed and control returns to
//! the menu; end of input exits the loop.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::services::Ledger;

use super::{account, transaction};

const MENU: &str = "
===== Bank Management System =====
1. Create Account
2. Deposit
3. Withdraw
4. Transfer
5. Check Balance
6. Transaction History
7. Display All Accounts
8. Delete Account
0. Exit";

/// Prompts and reads answers from a pair of streams
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Print `prompt` and read one trimmed line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> LedgerResult<()> {
        writeln!(self.output, "{}", text.trim_end())?;
        Ok(())
    }
}

/// Run the menu loop until the user chooses 0 or input ends
pub fn run_menu<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    settings: &Settings,
    input: R,
    output: W,
) -> LedgerResult<()> {
    let mut prompter = Prompter { input, output };

    loop {
        prompter.say(MENU)?;
        let Some(choice) = prompter.ask("Enter choice: ")? else {
            break;
        };

        let result = match choice.as_str() {
            "0" => {
                prompter.say("Exiting... Thank you!")?;
                break;
            }
            "1" => create(&mut prompter, ledger),
            "2" => deposit(&mut prompter, ledger, settings),
            "3" => withdraw(&mut prompter, ledger, settings),
            "4" => transfer(&mut prompter, ledger, settings),
            "5" => with_id(&mut prompter, |id| account::show_balance(ledger, settings, id)),
            "6" => with_id(&mut prompter, |id| transaction::show_history(ledger, settings, id)),
            "7" => Ok(Some(account::list_accounts(ledger, settings))),
            "8" => with_id(&mut prompter, |id| account::delete_account(ledger, id)),
            _ => Ok(Some("Invalid choice!".to_string())),
        };

        match result {
            Ok(Some(status)) => prompter.say(&status)?,
            // Input ended mid-operation
            Ok(None) => break,
            Err(e @ LedgerError::Io(_)) => return Err(e),
            Err(e) => prompter.say(&e.to_string())?,
        }
    }

    Ok(())
}

type Outcome = LedgerResult<Option<String>>;

fn with_id<R, W, F>(prompter: &mut Prompter<R, W>, op: F) -> Outcome
where
    R: BufRead,
    W: Write,
    F: FnOnce(&str) -> LedgerResult<String>,
{
    match prompter.ask("Enter Account Number: ")? {
        Some(id) => op(&id).map(Some),
        None => Ok(None),
    }
}

fn create<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, ledger: &mut Ledger) -> Outcome {
    let Some(id) = prompter.ask("Enter Account Number: ")? else {
        return Ok(None);
    };
    let Some(holder) = prompter.ask("Enter Holder Name: ")? else {
        return Ok(None);
    };
    let Some(balance) = prompter.ask("Enter Initial Balance: ")? else {
        return Ok(None);
    };
    account::create_account(ledger, &id, &holder, &balance).map(Some)
}

fn deposit<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    ledger: &mut Ledger,
    settings: &Settings,
) -> Outcome {
    let Some(id) = prompter.ask("Enter Account Number: ")? else {
        return Ok(None);
    };
    if ledger.lookup(&id).is_none() {
        return Err(LedgerError::AccountNotFound(id));
    }
    let Some(amount) = prompter.ask("Enter Amount to Deposit: ")? else {
        return Ok(None);
    };
    transaction::deposit(ledger, settings, &id, &amount).map(Some)
}

fn withdraw<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    ledger: &mut Ledger,
    settings: &Settings,
) -> Outcome {
    let Some(id) = prompter.ask("Enter Account Number: ")? else {
        return Ok(None);
    };
    if ledger.lookup(&id).is_none() {
        return Err(LedgerError::AccountNotFound(id));
    }
    let Some(amount) = prompter.ask("Enter Amount to Withdraw: ")? else {
        return Ok(None);
    };
    transaction::withdraw(ledger, settings, &id, &amount).map(Some)
}

fn transfer<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    ledger: &mut Ledger,
    settings: &Settings,
) -> Outcome {
    let Some(from) = prompter.ask("Enter From Account Number: ")? else {
        return Ok(None);
    };
    let Some(to) = prompter.ask("Enter To Account Number: ")? else {
        return Ok(None);
    };
    for id in [&from, &to] {
        if ledger.lookup(id).is_none() {
            return Err(LedgerError::AccountNotFound(id.clone()));
        }
    }
    let Some(amount) = prompter.ask("Enter Amount to Transfer: ")? else {
        return Ok(None);
    };
    transaction::transfer(ledger, settings, &from, &to, &amount).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::LedgerStore;
    use tempfile::TempDir;

    fn run(ledger: &mut Ledger, script: &str) -> String {
        let mut output = Vec::new();
        run_menu(ledger, &Settings::default(), script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn create_test_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::open(LedgerStore::new(temp_dir.path().join("ledger.json")));
        (temp_dir, ledger)
    }

    #[test]
    fn test_full_session() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        let script = "\
1\nA1\nAlice Smith\n100\n\
1\nA2\nBob\n0\n\
2\nA1\n50\n\
3\nA1\n200\n\
4\nA1\nA2\n100\n\
5\nA1\n\
0\n";

        let output = run(&mut ledger, script);
        assert!(output.contains("Account created successfully!"));
        assert!(output.contains("Deposited: $50.00"));
        assert!(output.contains("Insufficient funds in account 'A1'"));
        assert!(output.contains("Transferred $100.00 to Bob"));
        assert!(output.contains("Balance: $50.00"));
        assert!(output.trim_end().ends_with("Exiting... Thank you!"));

        assert_eq!(ledger.lookup("A1").unwrap().holder_name(), "Alice Smith");
        assert_eq!(ledger.balance("A2").unwrap(), Money::from_cents(10000));
    }

    #[test]
    fn test_invalid_choice_and_unknown_account_return_to_menu() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        let output = run(&mut ledger, "9\n2\nnope\n7\n0\n");

        assert!(output.contains("Invalid choice!"));
        assert!(output.contains("Account not found: nope"));
        assert!(output.contains("No accounts available."));
        // Deposit amount is never asked for an unknown account
        assert!(!output.contains("Enter Amount to Deposit"));
    }

    #[test]
    fn test_bad_amount_is_reported() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        let output = run(&mut ledger, "1\nA1\nAlice\nabc\n0\n");

        assert!(output.contains("Invalid amount 'abc'"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        let output = run(&mut ledger, "1\nA1\n");

        assert!(output.contains("Enter Holder Name: "));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_delete_via_menu() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        ledger.create("A1", "Alice", Money::zero()).unwrap();

        let output = run(&mut ledger, "8\nA1\n8\nA1\n0\n");
        assert!(output.contains("Account deleted successfully."));
        assert!(output.contains("Account not found: A1"));
        assert!(ledger.is_empty());
    }
}
