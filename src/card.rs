// src/card.rs
//
// Card summary + statement, as rendered by the site.
// Every value is the display string from the page (currency symbols,
// trailing '-' on debits and all); nothing is parsed into numbers.

use serde::Serialize;

/// One statement line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub date: String,
    pub details: String,
    pub description: String,
    pub amount: String,
    pub balance: String,
}

impl Transaction {
    pub const HEADERS: [&'static str; 5] = ["Date", "Details", "Description", "Amount", "Balance"];

    /// Column order matches `HEADERS`.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.details.clone(),
            self.description.clone(),
            self.amount.clone(),
            self.balance.clone(),
        ]
    }
}

/// Card summary and transaction history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Card {
    pub card_no: String,
    pub account_no: String,
    pub loads_to_date: String,
    pub purchases_to_date: String,
    pub available_balance: String,
    pub purchased_date: String,
    pub expiry_date: String,
    pub transactions: Vec<Transaction>,
}

impl Card {
    /// Label/value pairs for the summary block, in page order.
    pub fn summary(&self) -> [(&'static str, &str); 7] {
        [
            ("Card number", self.card_no.as_str()),
            ("Account number", self.account_no.as_str()),
            ("Loads to date", self.loads_to_date.as_str()),
            ("Purchases to date", self.purchases_to_date.as_str()),
            ("Available balance", self.available_balance.as_str()),
            ("Purchased", self.purchased_date.as_str()),
            ("Expires", self.expiry_date.as_str()),
        ]
    }

    pub fn transaction_headers() -> Vec<String> {
        Transaction::HEADERS.iter().map(|h| s!(*h)).collect()
    }

    pub fn transaction_rows(&self) -> Vec<Vec<String>> {
        self.transactions.iter().map(Transaction::to_row).collect()
    }
}
