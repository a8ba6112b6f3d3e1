//! Running-balance ledger construction
//!
//! Transactions arrive in whatever order they were generated. The ledger
//! posts them in bank posting order (date ascending, and on the same day
//! larger amounts first, so credits land before debits) and carries a
//! running balance rounded to cents after every posting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::model::{AccountSummary, LedgerEntry, Transaction};
use crate::money::round_cents;

/// Posting order: date ascending, then amount descending
pub fn posting_order(a: &Transaction, b: &Transaction) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| b.amount.total_cmp(&a.amount))
}

/// Posted transactions with their running balances
///
/// Balances are only ever derived from the postings. A deserialized ledger
/// is re-checked and rejected if any stored balance disagrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LedgerRecord")]
pub struct Ledger {
    opening_balance: f64,
    entries: Vec<LedgerEntry>,
}

/// Wire form of a [`Ledger`] before its balances are verified
#[derive(Deserialize)]
struct LedgerRecord {
    opening_balance: f64,
    entries: Vec<LedgerEntry>,
}

impl TryFrom<LedgerRecord> for Ledger {
    type Error = LedgerError;

    fn try_from(record: LedgerRecord) -> Result<Self, Self::Error> {
        if !record.opening_balance.is_finite() {
            return Err(LedgerError::NonFiniteOpening(record.opening_balance));
        }

        for (index, pair) in record.entries.windows(2).enumerate() {
            let order = pair[0]
                .date
                .cmp(&pair[1].date)
                .then_with(|| pair[1].amount.total_cmp(&pair[0].amount));
            if order == Ordering::Greater {
                return Err(LedgerError::OutOfOrder { index: index + 1 });
            }
        }

        let mut balance = record.opening_balance;
        for (index, entry) in record.entries.iter().enumerate() {
            balance = round_cents(balance + entry.amount);
            if entry.balance != balance {
                return Err(LedgerError::BalanceMismatch {
                    index,
                    expected: balance,
                    found: entry.balance,
                });
            }
        }

        Ok(Ledger {
            opening_balance: record.opening_balance,
            entries: record.entries,
        })
    }
}

impl Ledger {
    pub fn opening_balance(&self) -> f64 {
        self.opening_balance
    }

    /// Balance after the last posting, or the opening balance if nothing posted
    pub fn closing_balance(&self) -> f64 {
        self.entries
            .last()
            .map(|e| e.balance)
            .unwrap_or(self.opening_balance)
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_deposits(&self) -> f64 {
        round_cents(
            self.entries
                .iter()
                .filter(|e| e.amount > 0.0)
                .map(|e| e.amount)
                .sum(),
        )
    }

    /// Sum of all debits, as a positive amount
    pub fn total_withdrawals(&self) -> f64 {
        round_cents(
            -self
                .entries
                .iter()
                .filter(|e| e.amount < 0.0)
                .map(|e| e.amount)
                .sum::<f64>(),
        )
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            beginning_balance: self.opening_balance,
            ending_balance: self.closing_balance(),
            total_deposits: self.total_deposits(),
            total_withdrawals: self.total_withdrawals(),
        }
    }
}

/// Sort `transactions` into posting order and compute running balances.
///
/// Each posted balance is `round_cents(previous + amount)`, so rounding never
/// drifts over a long month. Negative balances are allowed.
pub fn build_ledger(opening_balance: f64, mut transactions: Vec<Transaction>) -> Ledger {
    transactions.sort_by(posting_order);

    let mut balance = opening_balance;
    let entries = transactions
        .into_iter()
        .map(|t| {
            balance = round_cents(balance + t.amount);
            LedgerEntry {
                date: t.date,
                description: t.description,
                amount: t.amount,
                balance,
            }
        })
        .collect();

    Ledger {
        opening_balance,
        entries,
    }
}
