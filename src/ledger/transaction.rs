use std::fmt;

use crate::ledger::account::Account;
use crate::ledger::bank::Amount;
use crate::ledger::error::BankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit { amount: Amount },
    Withdrawal { amount: Amount },
}

impl Transaction {
    pub fn amount(&self) -> Amount {
        match self {
            Transaction::Deposit { amount } | Transaction::Withdrawal { amount } => *amount,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Transaction::Deposit { .. } => "Deposit",
            Transaction::Withdrawal { .. } => "Withdrawal",
        }
    }

    /// Applies the transaction and records it in the account history.
    /// Nothing is recorded when the account rejects it.
    pub fn apply(self, account: &mut Account) -> Result<(), BankError> {
        match self {
            Transaction::Deposit { amount } => account.deposit(amount)?,
            Transaction::Withdrawal { amount } => account.withdraw(amount)?,
        }

        account.history_mut().push(self);
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {:.2}", self.label(), self.amount())
    }
}
