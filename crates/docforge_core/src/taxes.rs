//! Progressive income tax calculation
//!
//! Income is taxed slice by slice: each bracket taxes only the income between
//! the previous bracket's ceiling and its own, at its marginal rate.

use crate::model::{BracketSlice, BracketTable};
use crate::money::round_cents;

/// Calculate income tax using progressive brackets
/// Returns the total tax owed, rounded to cents once at the end
pub fn calculate_tax(income: f64, table: &BracketTable) -> f64 {
    if income <= 0.0 {
        return 0.0;
    }

    let mut tax = 0.0;
    let mut prev_bound = 0.0;

    for bracket in table.brackets() {
        if income <= prev_bound {
            break;
        }

        let upper = bracket.ceiling();
        let taxable_in_bracket = (income.min(upper) - prev_bound).max(0.0);
        tax += taxable_in_bracket * bracket.rate;
        prev_bound = upper;
    }

    round_cents(tax)
}

/// Per-bracket split of `income`, for every bracket the income reaches
///
/// Zero income still reports the first bracket with nothing taxed in it.
pub fn bracket_breakdown(income: f64, table: &BracketTable) -> Vec<BracketSlice> {
    let income = income.max(0.0);
    let mut slices = Vec::new();
    let mut prev_bound = 0.0;

    for bracket in table.brackets() {
        if income <= prev_bound && !slices.is_empty() {
            break;
        }

        let upper = bracket.ceiling();
        let taxable = (income.min(upper) - prev_bound).max(0.0);
        slices.push(BracketSlice {
            lower: prev_bound,
            upper: bracket.upper_bound,
            rate: bracket.rate,
            taxable,
            tax: taxable * bracket.rate,
        });
        prev_bound = upper;
    }

    slices
}

/// Rate applied to the last dollar of `income`
///
/// Income exactly on a bracket ceiling is still taxed at that bracket's rate.
pub fn marginal_rate(income: f64, table: &BracketTable) -> f64 {
    let brackets = table.brackets();
    brackets
        .iter()
        .find(|b| income <= b.ceiling())
        .or(brackets.last())
        .map(|b| b.rate)
        .unwrap_or(0.0)
}

/// Tax as a fraction of income, 0 when there is no income
pub fn effective_rate(tax: f64, income: f64) -> f64 {
    if income == 0.0 {
        return 0.0;
    }
    tax / income
}
