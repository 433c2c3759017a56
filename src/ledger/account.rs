use crate::ledger::bank::Amount;
use crate::ledger::error::BankError;
use crate::ledger::transaction::Transaction;

pub type AccountNumber = u32;

/// Withdrawal rules layered on top of the base balance check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalPolicy {
    Unrestricted,
    Checking {
        limit: Amount,
        max_withdrawals: u32,
        withdrawals_made: u32,
    },
}

impl WithdrawalPolicy {
    pub fn checking(limit: Amount, max_withdrawals: u32) -> Self {
        WithdrawalPolicy::Checking {
            limit,
            max_withdrawals,
            withdrawals_made: 0,
        }
    }
}

/// Append-only log of the transactions applied to one account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    transactions: Vec<Transaction>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    pub number: AccountNumber,
    pub branch: String,
    /// Tax id of the owning client.
    pub owner: String,
    balance: Amount,
    policy: WithdrawalPolicy,
    history: History,
}

impl Account {
    pub fn new(number: AccountNumber, branch: String, owner: String, policy: WithdrawalPolicy) -> Self {
        Self {
            number,
            branch,
            owner,
            balance: Amount::ZERO,
            policy,
            history: History::new(),
        }
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn policy(&self) -> &WithdrawalPolicy {
        &self.policy
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Number of successful withdrawals counted by the checking policy.
    pub fn withdrawals_made(&self) -> u32 {
        match self.policy {
            WithdrawalPolicy::Unrestricted => 0,
            WithdrawalPolicy::Checking { withdrawals_made, .. } => withdrawals_made,
        }
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<(), BankError> {
        if amount <= Amount::ZERO {
            return Err(BankError::InvalidDeposit(amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(BankError::BalanceOverflow { requested: amount })?;
        Ok(())
    }

    /// Checking rules run before the base rule: count first, then limit.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), BankError> {
        if let WithdrawalPolicy::Checking {
            limit,
            max_withdrawals,
            withdrawals_made,
        } = self.policy
        {
            if withdrawals_made >= max_withdrawals {
                return Err(BankError::WithdrawalCountExceeded { max: max_withdrawals });
            }
            if amount > limit {
                return Err(BankError::WithdrawalLimitExceeded {
                    requested: amount,
                    limit,
                });
            }
        }

        self.withdraw_base(amount)?;

        if let WithdrawalPolicy::Checking { withdrawals_made, .. } = &mut self.policy {
            *withdrawals_made += 1;
        }
        Ok(())
    }

    fn withdraw_base(&mut self, amount: Amount) -> Result<(), BankError> {
        if amount <= Amount::ZERO || amount > self.balance {
            return Err(BankError::InvalidWithdrawal {
                requested: amount,
                balance: self.balance,
            });
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(BankError::BalanceOverflow { requested: amount })?;
        Ok(())
    }
}
