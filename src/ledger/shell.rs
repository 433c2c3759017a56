//! Text menu driving the bank processor.
//!
//! The shell reads one menu option per line, prompts for the fields the
//! option needs and prints the outcome. Deposit, withdrawal and statement
//! always act on the client's first account.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::ledger::bank::{Amount, BankCommand, FindClient, GetBalance, GetStatement, Statement};
use crate::ledger::error::{ProcessorError, ShellError};
use crate::ledger::BankProcessor;

const MENU: &str = "
================ MENU ================
[d]\tDeposit
[s]\tWithdraw
[e]\tStatement
[nc]\tNew account
[lc]\tList accounts
[nu]\tNew client
[q]\tQuit
=> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewClient,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl FromStr for MenuOption {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "d" => Ok(MenuOption::Deposit),
            "s" => Ok(MenuOption::Withdraw),
            "e" => Ok(MenuOption::Statement),
            "nc" => Ok(MenuOption::NewAccount),
            "lc" => Ok(MenuOption::ListAccounts),
            "nu" => Ok(MenuOption::NewClient),
            "q" => Ok(MenuOption::Quit),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

enum Step {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    processor: BankProcessor,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(processor: BankProcessor, input: R, output: W) -> Self {
        Self {
            processor,
            input,
            output,
        }
    }

    pub fn processor(&self) -> &BankProcessor {
        &self.processor
    }

    pub fn into_processor(self) -> BankProcessor {
        self.processor
    }

    /// Runs until the quit option or end of input.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let Some(line) = self.prompt(MENU)? else {
                break;
            };

            let step = match line.parse::<MenuOption>() {
                Ok(option) => {
                    tracing::debug!(?option, "menu option selected");
                    self.dispatch(option)?
                }
                Err(UnknownOption(raw)) => {
                    tracing::debug!(%raw, "unknown menu option");
                    self.error("Invalid option, please select again.")?;
                    Step::Continue
                }
            };

            if let Step::Exit = step {
                break;
            }
        }

        writeln!(self.output, "Leaving the system. Goodbye!")?;
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> Result<Step, ShellError> {
        match option {
            MenuOption::Deposit => {
                self.transact(|tax_id, amount| BankCommand::Deposit { tax_id, amount }, "deposit")
            }
            MenuOption::Withdraw => self.transact(
                |tax_id, amount| BankCommand::Withdrawal { tax_id, amount },
                "withdrawal",
            ),
            MenuOption::Statement => self.statement(),
            MenuOption::NewAccount => self.new_account(),
            MenuOption::ListAccounts => self.list_accounts().map(|_| Step::Continue),
            MenuOption::NewClient => self.new_client(),
            MenuOption::Quit => Ok(Step::Exit),
        }
    }

    fn transact<F>(&mut self, build: F, kind: &str) -> Result<Step, ShellError>
    where
        F: FnOnce(String, Amount) -> BankCommand,
    {
        let Some(tax_id) = self.prompt("Enter the holder's tax id: ")? else {
            return Ok(Step::Exit);
        };
        let lookup = GetBalance {
            tax_id: tax_id.clone(),
        };
        if self.processor.execute_query(&lookup).is_err() {
            self.error("Client or account not found.")?;
            return Ok(Step::Continue);
        }

        let Some(raw) = self.prompt(&format!("Enter the {kind} amount: "))? else {
            return Ok(Step::Exit);
        };
        let amount = match Amount::from_str(&raw) {
            Ok(amount) => amount,
            Err(_) => {
                self.error(&format!("Invalid amount: {raw}"))?;
                return Ok(Step::Continue);
            }
        };

        match self.processor.execute_command(build(tax_id, amount)) {
            Ok(()) => self.success(&format!("{} completed successfully!", capitalize(kind)))?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    fn statement(&mut self) -> Result<Step, ShellError> {
        let Some(tax_id) = self.prompt("Enter the holder's tax id: ")? else {
            return Ok(Step::Exit);
        };

        match self.processor.execute_query(&GetStatement { tax_id }) {
            Ok(statement) => self.render_statement(&statement)?,
            Err(_) => self.error("Client or account not found.")?,
        }
        Ok(Step::Continue)
    }

    fn render_statement(&mut self, statement: &Statement) -> Result<(), ShellError> {
        let symbol = self.processor.system().config.currency_symbol.clone();

        writeln!(self.output, "\n================ STATEMENT ================")?;
        if statement.transactions.is_empty() {
            writeln!(self.output, "No transactions were made.")?;
        }
        for transaction in &statement.transactions {
            writeln!(
                self.output,
                "{}:\t{} {:.2}",
                transaction.label(),
                symbol,
                transaction.amount()
            )?;
        }
        writeln!(self.output, "\nBalance:\t{} {:.2}", symbol, statement.balance)?;
        writeln!(self.output, "===========================================")?;
        Ok(())
    }

    fn new_account(&mut self) -> Result<Step, ShellError> {
        let Some(tax_id) = self.prompt("Enter the client's tax id: ")? else {
            return Ok(Step::Exit);
        };

        match self.processor.execute_command(BankCommand::OpenAccount { tax_id }) {
            Ok(()) => {
                let number = self
                    .processor
                    .system()
                    .accounts()
                    .last()
                    .map(|account| account.number)
                    .unwrap_or_default();
                self.success(&format!("Account {number} created successfully!"))?;
            }
            Err(_) => self.error("Client not found!")?,
        }
        Ok(Step::Continue)
    }

    fn list_accounts(&mut self) -> Result<(), ShellError> {
        let bank = self.processor.system();
        let mut listed = 0;

        for summary in bank.account_summaries() {
            writeln!(self.output, "{}", "=".repeat(100))?;
            writeln!(self.output, "Branch:\t\t{}", summary.branch)?;
            writeln!(self.output, "Account:\t{}", summary.number)?;
            writeln!(self.output, "Holder:\t\t{}", summary.holder)?;
            listed += 1;
        }

        if listed == 0 {
            writeln!(self.output, "No accounts registered.")?;
        }
        Ok(())
    }

    fn new_client(&mut self) -> Result<Step, ShellError> {
        let Some(tax_id) = self.prompt("Enter the tax id (digits only): ")? else {
            return Ok(Step::Exit);
        };
        let lookup = FindClient {
            tax_id: tax_id.clone(),
        };
        if let Ok(Some(_)) = self.processor.execute_query(&lookup) {
            self.error("A client with this tax id already exists!")?;
            return Ok(Step::Continue);
        }

        let Some(name) = self.prompt("Enter the full name: ")? else {
            return Ok(Step::Exit);
        };
        let Some(birth_date) = self.prompt("Enter the birth date (dd-mm-yyyy): ")? else {
            return Ok(Step::Exit);
        };
        let Some(address) = self.prompt("Enter the address: ")? else {
            return Ok(Step::Exit);
        };

        let command = BankCommand::CreateClient {
            name,
            tax_id,
            birth_date,
            address,
        };
        match self.processor.execute_command(command) {
            Ok(()) => self.success("Client created successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Step::Continue)
    }

    /// Writes the prompt and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn success(&mut self, message: &str) -> Result<(), ShellError> {
        writeln!(self.output, "\n=== {message} ===")?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<(), ShellError> {
        writeln!(self.output, "\n@@@ {message} @@@")?;
        Ok(())
    }

    fn report(&mut self, failure: &ProcessorError) -> Result<(), ShellError> {
        let message = failure.bank_error().to_string();
        self.error(&message)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
