use crate::ledger::account::AccountNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub name: String,
    pub tax_id: String,
    /// Stored as typed by the operator (dd-mm-yyyy).
    pub birth_date: String,
    pub address: String,
    accounts: Vec<AccountNumber>,
}

impl Client {
    pub fn new(name: String, tax_id: String, birth_date: String, address: String) -> Self {
        Self {
            name,
            tax_id,
            birth_date,
            address,
            accounts: Vec::new(),
        }
    }

    /// Account numbers in opening order.
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn first_account(&self) -> Option<AccountNumber> {
        self.accounts.first().copied()
    }

    pub(crate) fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }
}
