use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use bank_ledger::audit::AuditLogger;
use bank_ledger::cli::{handle_command, run_menu, Command};
use bank_ledger::config::{paths::DATA_DIR_ENV, LedgerPaths, Settings};
use bank_ledger::services::Ledger;
use bank_ledger::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "bank",
    version,
    about = "Bank account ledger with file persistence",
    long_about = "Tracks accounts with balances and transaction histories. \
                  Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Directory holding the ledger, settings and audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Load settings, writing defaults on first run
///
/// A settings file that cannot be read falls back to defaults and is left
/// untouched on disk.
fn load_settings(paths: &LedgerPaths) -> Settings {
    if !paths.settings_file().exists() {
        let settings = Settings::default();
        if let Err(e) = settings.save(paths) {
            warn!(error = %e, "could not write default settings");
        }
        return settings;
    }

    Settings::load_or_create(paths).unwrap_or_else(|e| {
        warn!(error = %e, "using default settings");
        Settings::default()
    })
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    paths.ensure_directories()?;
    let settings = load_settings(&paths);

    let mut ledger = Ledger::open(LedgerStore::new(paths.ledger_file()));
    if settings.audit_enabled {
        ledger = ledger.with_audit(AuditLogger::new(paths.audit_log()));
    }

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            run_menu(&mut ledger, &settings, io::stdin().lock(), io::stdout())?;
        }
        Command::Config => {
            println!("Bank Ledger Configuration");
            println!("=========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        cmd => {
            let status = handle_command(&mut ledger, &settings, cmd)?;
            println!("{}", status.trim_end());
        }
    }

    Ok(())
}
