//! Monthly checking account activity
//!
//! Samples one month of transactions from a [`CheckingProfile`] and posts
//! them through the ledger builder.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::date_math::{days_in_month, month_date, month_end, month_start};
use crate::error::Result;
use crate::ledger::build_ledger;
use crate::model::{
    BankAccount, BudgetedSpend, CheckingProfile, CheckingStatement, DayRange, PayDay,
    StatementPeriod, Transaction,
};
use crate::money::{from_cents, to_cents};

/// Sample every transaction for one month, in generation order (unsorted)
///
/// The profile is validated first, so a bad range is reported rather than
/// reaching the sampler.
pub fn checking_transactions<R: Rng + ?Sized>(
    profile: &CheckingProfile,
    year: i16,
    month: i8,
    rng: &mut R,
) -> Result<Vec<Transaction>> {
    profile.validate()?;
    let last_day = days_in_month(year, month);
    let mut transactions = Vec::new();

    for pay_day in &profile.pay_days {
        let day = match pay_day {
            PayDay::Day { day } => *day,
            PayDay::LastDay => last_day,
        };
        let date = month_date(year, month, day)?;
        for paycheck in &profile.paychecks {
            transactions.push(Transaction::credit(
                date,
                &paycheck.description,
                paycheck.amount,
            ));
        }
    }

    for expense in &profile.fixed_expenses {
        let date = month_date(year, month, expense.day)?;
        transactions.push(Transaction::debit(date, &expense.description, expense.amount));
    }

    for bill in &profile.variable_bills {
        let amount = bill.amount.sample(rng);
        let day = bill.days.sample(rng, year, month);
        let date = month_date(year, month, day)?;
        transactions.push(Transaction::debit(date, &bill.description, amount));
    }

    let any_day = DayRange::whole_month();
    for category in &profile.spending {
        let visits = category.visits.sample(rng);
        for _ in 0..visits {
            let Some(merchant) = category.merchants.choose(rng) else {
                break;
            };
            let amount = category.amount.sample(rng);
            let date = month_date(year, month, any_day.sample(rng, year, month))?;
            transactions.push(Transaction::debit(
                date,
                format!("{} - {merchant}", category.prefix),
                amount,
            ));
        }
    }

    if let Some(cash) = &profile.cash_withdrawals {
        let visits = cash.visits.sample(rng);
        for _ in 0..visits {
            let Some(&amount) = cash.denominations.choose(rng) else {
                break;
            };
            let date = month_date(year, month, any_day.sample(rng, year, month))?;
            transactions.push(Transaction::debit(date, &cash.description, amount));
        }
    }

    if let Some(transfer) = &profile.savings_transfer {
        let day = transfer.days.sample(rng, year, month);
        let date = month_date(year, month, day)?;
        transactions.push(Transaction::debit(date, &transfer.description, transfer.amount));
    }

    if let Some(budget) = &profile.budgeted_spend {
        transactions.extend(sample_budgeted_debits(budget, year, month, rng)?);
    }

    Ok(transactions)
}

/// Debits that add up to exactly the monthly target
///
/// Amounts are tracked in whole cents. Each chunk is drawn from
/// `[chunk.min, min(chunk.max, remaining)]`; once the remainder is at or
/// below `settle_below` it is posted as the final debit.
pub fn budgeted_debits<R: Rng + ?Sized>(
    budget: &BudgetedSpend,
    year: i16,
    month: i8,
    rng: &mut R,
) -> Result<Vec<Transaction>> {
    budget.validate()?;
    sample_budgeted_debits(budget, year, month, rng)
}

fn sample_budgeted_debits<R: Rng + ?Sized>(
    budget: &BudgetedSpend,
    year: i16,
    month: i8,
    rng: &mut R,
) -> Result<Vec<Transaction>> {
    let target = to_cents(budget.monthly_target);
    let settle_below = to_cents(budget.settle_below);
    let chunk_min = to_cents(budget.chunk.min).max(1);
    let chunk_max = to_cents(budget.chunk.max).max(chunk_min);
    let any_day = DayRange::whole_month();

    let mut debits = Vec::new();
    let mut spent = 0_i64;
    while spent < target {
        let remaining = target - spent;
        let cents = if remaining <= settle_below || remaining <= chunk_min {
            remaining
        } else {
            rng.random_range(chunk_min..=chunk_max.min(remaining))
        };
        spent += cents;

        let date = month_date(year, month, any_day.sample(rng, year, month))?;
        debits.push(Transaction::debit(
            date,
            &budget.description,
            from_cents(cents),
        ));
    }
    Ok(debits)
}

/// Generate one month's checking statement starting from `opening_balance`
pub fn checking_statement<R: Rng + ?Sized>(
    account: &BankAccount,
    profile: &CheckingProfile,
    year: i16,
    month: i8,
    opening_balance: f64,
    rng: &mut R,
) -> Result<CheckingStatement> {
    let transactions = checking_transactions(profile, year, month, rng)?;
    let ledger = build_ledger(opening_balance, transactions);

    Ok(CheckingStatement {
        year,
        month,
        account_number: account.account_number.clone(),
        period: StatementPeriod {
            start: month_start(year, month)?,
            end: month_end(year, month)?,
        },
        ledger,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, GenerateError};
    use crate::model::{
        AmountRange, CashWithdrawals, CountRange, FixedExpense, Paycheck, ScheduledTransfer,
        SpendingCategory, VariableBill,
    };
    use jiff::civil::date;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn profile() -> CheckingProfile {
        CheckingProfile {
            pay_days: vec![PayDay::Day { day: 15 }, PayDay::LastDay],
            paychecks: vec![Paycheck {
                description: "Direct Deposit - ACME".to_string(),
                amount: 2_853.43,
            }],
            fixed_expenses: vec![FixedExpense {
                description: "Rent".to_string(),
                amount: 1_200.0,
                day: 31,
            }],
            variable_bills: vec![VariableBill {
                description: "Electric".to_string(),
                amount: AmountRange::new(140.0, 210.0),
                days: DayRange::new(15, 20),
            }],
            spending: vec![SpendingCategory {
                name: "groceries".to_string(),
                prefix: "POS Purchase".to_string(),
                merchants: vec!["Kroger".to_string(), "Publix".to_string()],
                visits: CountRange::new(4, 6),
                amount: AmountRange::new(85.0, 220.0),
            }],
            cash_withdrawals: Some(CashWithdrawals {
                description: "ATM Withdrawal".to_string(),
                denominations: vec![40.0, 60.0, 80.0],
                visits: CountRange::new(1, 3),
            }),
            savings_transfer: Some(ScheduledTransfer {
                description: "Transfer to Savings".to_string(),
                amount: 500.0,
                days: DayRange::new(16, 20),
            }),
            budgeted_spend: Some(BudgetedSpend {
                description: "DraftKings".to_string(),
                monthly_target: 700.0,
                chunk: AmountRange::new(15.0, 75.0),
                settle_below: 25.0,
            }),
        }
    }

    #[test]
    fn test_paychecks_on_pay_days() {
        let mut rng = StdRng::seed_from_u64(1);
        let txns = checking_transactions(&profile(), 2024, 2, &mut rng).unwrap();
        let pay_dates: Vec<_> = txns
            .iter()
            .filter(|t| t.description.starts_with("Direct Deposit"))
            .map(|t| t.date)
            .collect();
        assert_eq!(pay_dates, vec![date(2024, 2, 15), date(2024, 2, 29)]);
    }

    #[test]
    fn test_fixed_expense_clamped_to_month_end() {
        let mut rng = StdRng::seed_from_u64(1);
        let txns = checking_transactions(&profile(), 2023, 4, &mut rng).unwrap();
        let rent = txns.iter().find(|t| t.description == "Rent").unwrap();
        assert_eq!(rent.date, date(2023, 4, 30));
        assert_eq!(rent.amount, -1_200.0);
    }

    #[test]
    fn test_spending_descriptions_and_ranges() {
        let mut rng = StdRng::seed_from_u64(9);
        let txns = checking_transactions(&profile(), 2024, 6, &mut rng).unwrap();
        let groceries: Vec<_> = txns
            .iter()
            .filter(|t| t.description.starts_with("POS Purchase - "))
            .collect();
        assert!((4..=6).contains(&groceries.len()));
        for t in groceries {
            assert!((-220.0..=-85.0).contains(&t.amount), "{}", t.amount);
            assert!(t.date.year() == 2024 && t.date.month() == 6);
        }
    }

    #[test]
    fn test_budgeted_spend_hits_target_exactly() {
        let budget = profile().budgeted_spend.unwrap();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let debits = budgeted_debits(&budget, 2024, 3, &mut rng).unwrap();
            let total: i64 = debits.iter().map(|t| -to_cents(t.amount)).sum();
            assert_eq!(total, 70_000, "seed {seed}");
            for t in &debits {
                assert!(t.amount < 0.0);
                assert!(-t.amount <= 75.0, "chunk {} above max", t.amount);
            }
        }
    }

    #[test]
    fn test_budgeted_spend_zero_target_posts_nothing() {
        let mut budget = profile().budgeted_spend.unwrap();
        budget.monthly_target = 0.0;
        let mut rng = StdRng::seed_from_u64(4);
        assert!(budgeted_debits(&budget, 2024, 3, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_unbounded_bill_amount_is_an_error() {
        let mut profile = profile();
        profile.variable_bills[0].amount = AmountRange::new(140.0, f64::INFINITY);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            checking_transactions(&profile, 2024, 1, &mut rng),
            Err(GenerateError::Config(ConfigError::NonFinite { .. }))
        ));
    }

    #[test]
    fn test_budgeted_debits_rejects_zero_chunk() {
        let mut budget = profile().budgeted_spend.unwrap();
        budget.chunk = AmountRange::new(0.0, 75.0);
        let mut rng = StdRng::seed_from_u64(4);
        assert!(budgeted_debits(&budget, 2024, 3, &mut rng).is_err());
    }

    #[test]
    fn test_statement_period_and_balance() {
        let account = BankAccount {
            bank_name: "First National".to_string(),
            account_holder: "Bob Doe".to_string(),
            account_number: "****4827".to_string(),
            routing_number: "064000017".to_string(),
            account_type: "Joint Checking".to_string(),
            address: "456 Maple Street".to_string(),
        };
        let mut rng = StdRng::seed_from_u64(12);
        let statement =
            checking_statement(&account, &profile(), 2024, 2, 3_500.0, &mut rng).unwrap();
        assert_eq!(statement.period.start, date(2024, 2, 1));
        assert_eq!(statement.period.end, date(2024, 2, 29));

        let net: f64 = statement.ledger.entries().iter().map(|e| e.amount).sum();
        let expected = 3_500.0 + net;
        assert!(
            (statement.ledger.closing_balance() - expected).abs() < 0.01,
            "Expected {expected}, got {}",
            statement.ledger.closing_balance()
        );
        assert_eq!(statement.file_name("DoE"), "DoE_Statement_2024_02_February.pdf");
    }
}
