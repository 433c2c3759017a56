use std::io::{stdin, stdout};
use std::path::PathBuf;

use clap::Parser;
use rbank::ledger::bank::{Amount, Bank};
use rbank::ledger::config::BankConfig;
use rbank::ledger::shell::Shell;
use rbank::ledger::BankProcessor;

/// Interactive in-memory banking ledger
#[derive(Parser, Debug)]
#[command(name = "rbank")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with branch and checking-account settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Branch code assigned to new accounts
    #[arg(long)]
    branch: Option<String>,

    /// Maximum amount per withdrawal
    #[arg(long)]
    withdrawal_limit: Option<Amount>,

    /// Maximum number of withdrawals per account
    #[arg(long)]
    max_withdrawals: Option<u32>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn bank_config(&self) -> Result<BankConfig, rbank::ledger::ConfigError> {
        let mut config = match &self.config {
            Some(path) => BankConfig::from_file(path)?,
            None => BankConfig::default(),
        };

        if let Some(branch) = &self.branch {
            config.branch = branch.clone();
        }
        if let Some(limit) = self.withdrawal_limit {
            config.withdrawal_limit = limit;
        }
        if let Some(max) = self.max_withdrawals {
            config.max_withdrawals = max;
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    rbank::init_tracing(&args.log_level);

    let config = args.bank_config()?;
    tracing::info!(?config, "starting ledger");

    let processor = BankProcessor::new(Bank::with_config(config));
    let mut shell = Shell::new(processor, stdin().lock(), stdout().lock());
    shell.run()?;

    Ok(())
}
