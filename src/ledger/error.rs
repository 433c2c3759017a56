use std::fmt;
use thiserror::Error;

use crate::ledger::bank::Amount;

/// Domain failures raised by accounts and the client/account directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("Invalid deposit: amount must be positive (got {0})")]
    InvalidDeposit(Amount),

    #[error("Invalid withdrawal: check the amount (requested {requested}, balance {balance})")]
    InvalidWithdrawal { requested: Amount, balance: Amount },

    #[error("Amount {requested} exceeds the withdrawal limit of {limit}")]
    WithdrawalLimitExceeded { requested: Amount, limit: Amount },

    #[error("Withdrawal count limit reached ({max} withdrawals)")]
    WithdrawalCountExceeded { max: u32 },

    #[error("Amount {requested} would overflow the account balance")]
    BalanceOverflow { requested: Amount },

    #[error("A client with tax id {0} already exists")]
    DuplicateClient(String),

    #[error("Client not found: {0}")]
    ClientNotFound(String),

    #[error("Client or account not found: {0}")]
    AccountNotFound(String),
}

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("Command failure: {0}")]
    CommandFailure(FailureOutcome),

    #[error("Query failure: {0}")]
    QueryFailure(FailureOutcome),
}

impl ProcessorError {
    /// The domain error behind this failure.
    pub fn bank_error(&self) -> &BankError {
        match self {
            ProcessorError::CommandFailure(outcome) | ProcessorError::QueryFailure(outcome) => {
                &outcome.source
            }
        }
    }
}

#[derive(Debug)]
pub struct FailureOutcome {
    pub source: BankError,
    pub context: String,
    pub command_type: String,
}

impl FailureOutcome {
    pub fn new(source: BankError, context: &str, command_type: &str) -> Self {
        Self {
            source,
            context: context.to_string(),
            command_type: command_type.to_string(),
        }
    }
}

impl fmt::Display for FailureOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error while {} {}: {}",
            self.context, self.command_type, self.source
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
