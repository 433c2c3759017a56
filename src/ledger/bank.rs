use crate::ledger::account::{Account, AccountNumber, WithdrawalPolicy};
use crate::ledger::client::Client;
use crate::ledger::config::BankConfig;
use crate::ledger::error::BankError;
use crate::ledger::processor::{Command, Query};
use crate::ledger::transaction::Transaction;
use rust_decimal::Decimal;

pub type Amount = Decimal;

/// The client and account directories for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    pub config: BankConfig,
    clients: Vec<Client>,
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::with_config(BankConfig::default())
    }

    pub fn with_config(config: BankConfig) -> Self {
        Self {
            config,
            clients: Vec::new(),
            accounts: Vec::new(),
        }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn find_client(&self, tax_id: &str) -> Option<&Client> {
        self.clients.iter().find(|client| client.tax_id == tax_id)
    }

    fn find_client_mut(&mut self, tax_id: &str) -> Option<&mut Client> {
        self.clients.iter_mut().find(|client| client.tax_id == tax_id)
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number == number)
    }

    fn account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.number == number)
    }

    pub fn create_client(&mut self, client: Client) -> Result<(), BankError> {
        if self.find_client(&client.tax_id).is_some() {
            return Err(BankError::DuplicateClient(client.tax_id));
        }

        tracing::info!(tax_id = %client.tax_id, "client created");
        self.clients.push(client);
        Ok(())
    }

    /// Opens a checking account for an existing client and returns its number.
    pub fn open_account(&mut self, tax_id: &str) -> Result<AccountNumber, BankError> {
        let number = self.accounts.len() as AccountNumber + 1;
        let policy =
            WithdrawalPolicy::checking(self.config.withdrawal_limit, self.config.max_withdrawals);
        let branch = self.config.branch.clone();

        let client = self
            .find_client_mut(tax_id)
            .ok_or_else(|| BankError::ClientNotFound(tax_id.to_string()))?;
        client.add_account(number);

        self.accounts
            .push(Account::new(number, branch, tax_id.to_string(), policy));
        tracing::info!(tax_id, number, "account opened");
        Ok(number)
    }

    /// The account every operator command acts on: the client's first one.
    pub fn primary_account(&self, tax_id: &str) -> Result<&Account, BankError> {
        self.find_client(tax_id)
            .and_then(Client::first_account)
            .and_then(|number| self.account(number))
            .ok_or_else(|| BankError::AccountNotFound(tax_id.to_string()))
    }

    fn primary_account_mut(&mut self, tax_id: &str) -> Result<&mut Account, BankError> {
        let number = self
            .find_client(tax_id)
            .and_then(Client::first_account)
            .ok_or_else(|| BankError::AccountNotFound(tax_id.to_string()))?;
        self.account_mut(number)
            .ok_or_else(|| BankError::AccountNotFound(tax_id.to_string()))
    }

    pub fn apply_transaction(&mut self, tax_id: &str, transaction: Transaction) -> Result<(), BankError> {
        transaction.apply(self.primary_account_mut(tax_id)?)
    }

    /// Lazy, restartable listing in account-opening order.
    pub fn account_summaries(&self) -> impl Iterator<Item = AccountSummary<'_>> + '_ {
        self.accounts.iter().map(move |account| AccountSummary {
            branch: &account.branch,
            number: account.number,
            holder: self
                .find_client(&account.owner)
                .map(|client| client.name.as_str())
                .unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSummary<'a> {
    pub branch: &'a str,
    pub number: AccountNumber,
    pub holder: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub transactions: Vec<Transaction>,
    pub balance: Amount,
}

// Commands

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankCommand {
    CreateClient {
        name: String,
        tax_id: String,
        birth_date: String,
        address: String,
    },
    OpenAccount { tax_id: String },
    Deposit { tax_id: String, amount: Amount },
    Withdrawal { tax_id: String, amount: Amount },
}

impl Command for BankCommand {
    type System = Bank;

    fn apply_to(&self, bank: &mut Self::System) -> Result<(), BankError> {
        match self {
            BankCommand::CreateClient {
                name,
                tax_id,
                birth_date,
                address,
            } => bank.create_client(Client::new(
                name.clone(),
                tax_id.clone(),
                birth_date.clone(),
                address.clone(),
            )),
            BankCommand::OpenAccount { tax_id } => bank.open_account(tax_id).map(|_| ()),
            BankCommand::Deposit { tax_id, amount } => {
                bank.apply_transaction(tax_id, Transaction::Deposit { amount: *amount })
            }
            BankCommand::Withdrawal { tax_id, amount } => {
                bank.apply_transaction(tax_id, Transaction::Withdrawal { amount: *amount })
            }
        }
    }
}

// Queries

#[derive(Debug)]
pub struct FindClient {
    pub tax_id: String,
}

impl Query for FindClient {
    type System = Bank;
    type Result = Option<Client>;

    fn extract_from(&self, bank: &Self::System) -> Result<Self::Result, BankError> {
        Ok(bank.find_client(&self.tax_id).cloned())
    }
}

#[derive(Debug)]
pub struct GetStatement {
    pub tax_id: String,
}

impl Query for GetStatement {
    type System = Bank;
    type Result = Statement;

    fn extract_from(&self, bank: &Self::System) -> Result<Self::Result, BankError> {
        let account = bank.primary_account(&self.tax_id)?;
        Ok(Statement {
            transactions: account.history().transactions().to_vec(),
            balance: account.balance(),
        })
    }
}

#[derive(Debug)]
pub struct GetBalance {
    pub tax_id: String,
}

impl Query for GetBalance {
    type System = Bank;
    type Result = Amount;

    fn extract_from(&self, bank: &Self::System) -> Result<Self::Result, BankError> {
        bank.primary_account(&self.tax_id).map(Account::balance)
    }
}
