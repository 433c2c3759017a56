use std::path::Path;

use serde::Deserialize;

use crate::ledger::bank::Amount;
use crate::ledger::error::ConfigError;

/// Branch and checking-account settings applied to every new account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    pub branch: String,
    pub withdrawal_limit: Amount,
    pub max_withdrawals: u32,
    pub currency_symbol: String,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            branch: "0001".to_string(),
            withdrawal_limit: Amount::new(500, 0),
            max_withdrawals: 3,
            currency_symbol: "R$".to_string(),
        }
    }
}

impl BankConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
