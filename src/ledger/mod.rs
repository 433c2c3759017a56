mod error;
mod processor;

pub mod account;
pub mod bank;
pub mod client;
pub mod config;
pub mod shell;
pub mod transaction;

pub use error::{BankError, ConfigError, FailureOutcome, ProcessorError, ShellError};
pub use processor::{Command, Processor, Query};

pub type BankProcessor = Processor<bank::Bank, bank::BankCommand>;
