use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A dated, signed account movement (positive = credit, negative = debit)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: Date,
    pub description: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(date: Date, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
        }
    }

    pub fn credit(date: Date, description: impl Into<String>, amount: f64) -> Self {
        Self::new(date, description, amount.abs())
    }

    pub fn debit(date: Date, description: impl Into<String>, amount: f64) -> Self {
        Self::new(date, description, -amount.abs())
    }
}

/// A posted transaction with the balance after it was applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub date: Date,
    pub description: String,
    pub amount: f64,
    pub balance: f64,
}

/// Totals shown in a statement's summary box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub beginning_balance: f64,
    pub ending_balance: f64,
    pub total_deposits: f64,
    /// Sum of debits as a positive magnitude
    pub total_withdrawals: f64,
}
