//! Monthly savings account activity

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::date_math::{days_in_month, month_date, month_end, month_start};
use crate::error::Result;
use crate::ledger::build_ledger;
use crate::model::{
    BankAccount, DayRange, SavingsProfile, SavingsStatement, StatementPeriod, Transaction,
};
use crate::money::round_cents;

/// Generate one month's savings statement
///
/// Interest is computed on the opening balance and posted on the last day
/// of the month. `ytd_interest` is the interest earned before this month.
/// An invalid profile is rejected before anything is sampled.
pub fn savings_statement<R: Rng + ?Sized>(
    account: &BankAccount,
    profile: &SavingsProfile,
    year: i16,
    month: i8,
    opening_balance: f64,
    ytd_interest: f64,
    rng: &mut R,
) -> Result<SavingsStatement> {
    profile.validate()?;
    let last_day = days_in_month(year, month);
    let mut transactions = Vec::with_capacity(3);

    let deposit_day = profile.deposit.days.sample(rng, year, month);
    transactions.push(Transaction::credit(
        month_date(year, month, deposit_day)?,
        &profile.deposit.description,
        profile.deposit.amount,
    ));

    let interest = round_cents(opening_balance * profile.monthly_rate());
    transactions.push(Transaction::credit(
        month_date(year, month, last_day)?,
        &profile.interest_description,
        interest,
    ));

    if let Some(withdrawal) = &profile.withdrawal
        && rng.random_bool(withdrawal.probability)
        && let Some(reason) = withdrawal.reasons.choose(rng)
    {
        let amount = reason.amount.sample(rng);
        let window = DayRange::new(withdrawal.margin_days, last_day - withdrawal.margin_days);
        let day = window.sample(rng, year, month);
        transactions.push(Transaction::debit(
            month_date(year, month, day)?,
            &reason.description,
            amount,
        ));
    }

    let ledger = build_ledger(opening_balance, transactions);

    Ok(SavingsStatement {
        year,
        month,
        account_number: account.account_number.clone(),
        period: StatementPeriod {
            start: month_start(year, month)?,
            end: month_end(year, month)?,
        },
        apy_percent: profile.apy_percent,
        interest_earned: interest,
        ytd_interest: round_cents(ytd_interest + interest),
        ledger,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, GenerateError};
    use crate::model::{AmountRange, OccasionalWithdrawal, ScheduledTransfer, WithdrawalReason};
    use jiff::civil::date;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn account() -> BankAccount {
        BankAccount {
            bank_name: "First National".to_string(),
            account_holder: "Bob Doe".to_string(),
            account_number: "****9821".to_string(),
            routing_number: "064000017".to_string(),
            account_type: "High-Yield Savings".to_string(),
            address: "456 Maple Street".to_string(),
        }
    }

    fn profile(probability: f64) -> SavingsProfile {
        SavingsProfile {
            apy_percent: 4.25,
            deposit: ScheduledTransfer {
                description: "Transfer from Checking".to_string(),
                amount: 500.0,
                days: DayRange::new(16, 20),
            },
            interest_description: "Interest Payment".to_string(),
            withdrawal: Some(OccasionalWithdrawal {
                probability,
                reasons: vec![WithdrawalReason {
                    description: "Transfer to Checking - Car Repair".to_string(),
                    amount: AmountRange::new(400.0, 1_200.0),
                }],
                margin_days: 5,
            }),
        }
    }

    #[test]
    fn test_interest_on_opening_balance() {
        let mut rng = StdRng::seed_from_u64(3);
        let statement =
            savings_statement(&account(), &profile(0.0), 2024, 1, 12_000.0, 0.0, &mut rng)
                .unwrap();
        // 12,000 * 4.25% / 12 = 42.50
        assert_eq!(statement.interest_earned, 42.5);
        assert_eq!(statement.ytd_interest, 42.5);

        let last = statement.ledger.entries().last().unwrap();
        assert_eq!(last.date, date(2024, 1, 31));
        assert_eq!(last.description, "Interest Payment");
        assert_eq!(statement.ledger.closing_balance(), 12_542.5);
    }

    #[test]
    fn test_no_withdrawal_when_probability_zero() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let statement =
                savings_statement(&account(), &profile(0.0), 2024, 5, 1_000.0, 0.0, &mut rng)
                    .unwrap();
            assert_eq!(statement.ledger.len(), 2);
            assert_eq!(statement.ledger.total_withdrawals(), 0.0);
        }
    }

    #[test]
    fn test_withdrawal_inside_margins() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let statement =
                savings_statement(&account(), &profile(1.0), 2023, 2, 5_000.0, 10.0, &mut rng)
                    .unwrap();
            let withdrawal = statement
                .ledger
                .entries()
                .iter()
                .find(|e| e.amount < 0.0)
                .unwrap();
            assert!((5..=23).contains(&withdrawal.date.day()));
            assert!((400.0..=1_200.0).contains(&-withdrawal.amount));
        }
    }

    #[test]
    fn test_probability_above_one_is_an_error() {
        let mut rng = StdRng::seed_from_u64(3);
        let result =
            savings_statement(&account(), &profile(1.5), 2024, 1, 1_000.0, 0.0, &mut rng);
        assert!(matches!(
            result,
            Err(GenerateError::Config(ConfigError::InvalidProbability { .. }))
        ));
    }

    #[test]
    fn test_ytd_interest_accumulates() {
        let mut rng = StdRng::seed_from_u64(8);
        let statement =
            savings_statement(&account(), &profile(0.0), 2024, 7, 12_000.0, 100.0, &mut rng)
                .unwrap();
        assert_eq!(statement.ytd_interest, 142.5);
        assert_eq!(statement.file_name("DoE"), "DoE_Savings_2024_07_July.pdf");
    }
}
