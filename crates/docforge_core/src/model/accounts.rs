//! Bank account definitions and their monthly activity profiles
//!
//! A profile describes *what kind* of activity an account sees in a month
//! (paychecks, bills, card purchases, transfers). The generators in
//! `generators::checking` and `generators::savings` sample concrete
//! transactions from it.

use serde::{Deserialize, Serialize};

use super::schedule::{AmountRange, CountRange, DayRange, require_finite};
use crate::error::ConfigError;

/// Identifying details printed on a bank statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub bank_name: String,
    pub account_holder: String,
    pub account_number: String,
    pub routing_number: String,
    pub account_type: String,
    pub address: String,
}

/// Day of the month a paycheck lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PayDay {
    /// A fixed day, clamped to the month end
    Day { day: i8 },
    LastDay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paycheck {
    pub description: String,
    /// Net amount per pay period
    pub amount: f64,
}

/// A bill with a fixed amount and posting day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedExpense {
    pub description: String,
    pub amount: f64,
    /// Posting day, clamped to the month end
    pub day: i8,
}

/// A bill whose amount and posting day vary month to month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableBill {
    pub description: String,
    pub amount: AmountRange,
    pub days: DayRange,
}

/// Card purchases spread over the month at a pool of merchants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingCategory {
    pub name: String,
    /// Prefix of each transaction description, e.g. "POS Purchase"
    pub prefix: String,
    pub merchants: Vec<String>,
    pub visits: CountRange,
    pub amount: AmountRange,
}

/// ATM withdrawals in fixed denominations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashWithdrawals {
    pub description: String,
    pub denominations: Vec<f64>,
    pub visits: CountRange,
}

/// A recurring transfer of a fixed amount within a window of days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTransfer {
    pub description: String,
    pub amount: f64,
    pub days: DayRange,
}

/// A merchant debited in random chunks until a monthly total is reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetedSpend {
    pub description: String,
    pub monthly_target: f64,
    pub chunk: AmountRange,
    /// Once the remainder is at or below this, it is posted as one final debit
    pub settle_below: f64,
}

fn default_pay_days() -> Vec<PayDay> {
    vec![PayDay::Day { day: 15 }, PayDay::LastDay]
}

/// Monthly activity on a checking account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckingProfile {
    #[serde(default = "default_pay_days")]
    pub pay_days: Vec<PayDay>,
    /// Every paycheck posts once on each pay day
    #[serde(default)]
    pub paychecks: Vec<Paycheck>,
    #[serde(default)]
    pub fixed_expenses: Vec<FixedExpense>,
    #[serde(default)]
    pub variable_bills: Vec<VariableBill>,
    #[serde(default)]
    pub spending: Vec<SpendingCategory>,
    #[serde(default)]
    pub cash_withdrawals: Option<CashWithdrawals>,
    #[serde(default)]
    pub savings_transfer: Option<ScheduledTransfer>,
    #[serde(default)]
    pub budgeted_spend: Option<BudgetedSpend>,
}

impl CheckingProfile {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for pay_day in &self.pay_days {
            if let PayDay::Day { day } = pay_day {
                DayRange::new(*day, *day).validate("checking.pay_days")?;
            }
        }
        for expense in &self.fixed_expenses {
            DayRange::new(expense.day, expense.day)
                .validate(&format!("checking.fixed_expenses[{}]", expense.description))?;
        }
        for bill in &self.variable_bills {
            let field = format!("checking.variable_bills[{}]", bill.description);
            bill.amount.validate(&field)?;
            bill.days.validate(&field)?;
        }
        for category in &self.spending {
            let field = format!("checking.spending[{}]", category.name);
            if category.merchants.is_empty() {
                return Err(ConfigError::EmptyChoices { field });
            }
            category.visits.validate(&field)?;
            category.amount.validate(&field)?;
        }
        if let Some(cash) = &self.cash_withdrawals {
            if cash.denominations.is_empty() {
                return Err(ConfigError::EmptyChoices {
                    field: "checking.cash_withdrawals.denominations".to_string(),
                });
            }
            cash.visits.validate("checking.cash_withdrawals")?;
        }
        if let Some(transfer) = &self.savings_transfer {
            transfer.days.validate("checking.savings_transfer")?;
        }
        if let Some(budget) = &self.budgeted_spend {
            budget.validate()?;
        }
        Ok(())
    }
}

impl BudgetedSpend {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite("checking.budgeted_spend.monthly_target", self.monthly_target)?;
        require_finite("checking.budgeted_spend.settle_below", self.settle_below)?;
        if self.monthly_target < 0.0 {
            return Err(ConfigError::EmptyRange {
                field: "checking.budgeted_spend.monthly_target".to_string(),
                min: 0.0,
                max: self.monthly_target,
            });
        }
        self.chunk.validate("checking.budgeted_spend.chunk")?;
        // The final settling debit must be reachable from any remainder
        if self.chunk.min <= 0.0 || self.settle_below < self.chunk.min {
            return Err(ConfigError::EmptyRange {
                field: "checking.budgeted_spend.settle_below".to_string(),
                min: self.chunk.min,
                max: self.settle_below,
            });
        }
        Ok(())
    }
}

/// A one-off withdrawal reason with its typical size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalReason {
    pub description: String,
    pub amount: AmountRange,
}

/// Chance of a single larger withdrawal in any month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccasionalWithdrawal {
    pub probability: f64,
    pub reasons: Vec<WithdrawalReason>,
    /// Days kept clear at both ends of the month
    pub margin_days: i8,
}

fn default_interest_description() -> String {
    "Interest Payment".to_string()
}

/// Monthly activity on an interest-bearing savings account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsProfile {
    /// Annual percentage yield, e.g. 4.25 for 4.25%
    pub apy_percent: f64,
    pub deposit: ScheduledTransfer,
    #[serde(default = "default_interest_description")]
    pub interest_description: String,
    #[serde(default)]
    pub withdrawal: Option<OccasionalWithdrawal>,
}

impl SavingsProfile {
    /// Interest rate applied to the opening balance each month
    #[inline]
    pub fn monthly_rate(&self) -> f64 {
        self.apy_percent / 100.0 / 12.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite("savings.apy_percent", self.apy_percent)?;
        require_finite("savings.deposit.amount", self.deposit.amount)?;
        self.deposit.days.validate("savings.deposit")?;
        if let Some(withdrawal) = &self.withdrawal {
            if !(0.0..=1.0).contains(&withdrawal.probability) {
                return Err(ConfigError::InvalidProbability {
                    field: "savings.withdrawal.probability".to_string(),
                    value: withdrawal.probability,
                });
            }
            if withdrawal.reasons.is_empty() {
                return Err(ConfigError::EmptyChoices {
                    field: "savings.withdrawal.reasons".to_string(),
                });
            }
            for reason in &withdrawal.reasons {
                reason
                    .amount
                    .validate(&format!("savings.withdrawal[{}]", reason.description))?;
            }
            // Shortest month still needs at least one eligible day
            if withdrawal.margin_days < 1 || withdrawal.margin_days > 14 {
                return Err(ConfigError::InvalidDayRange {
                    field: "savings.withdrawal.margin_days".to_string(),
                    first: withdrawal.margin_days,
                    last: 28 - withdrawal.margin_days,
                });
            }
        }
        Ok(())
    }
}
