//! Individual income tax return (Form 1040 summary)

use crate::model::{TaxReturn, TaxReturnProfile};
use crate::money::round_cents;
use crate::taxes::{bracket_breakdown, calculate_tax, effective_rate, marginal_rate};

/// Compute the return for `profile`; deterministic
pub fn tax_return(profile: &TaxReturnProfile) -> TaxReturn {
    let total_wages = round_cents(profile.wage_statements.iter().map(|w| w.wages).sum());
    let total_withheld = round_cents(
        profile
            .wage_statements
            .iter()
            .map(|w| w.federal_withheld)
            .sum(),
    );

    let total_income =
        round_cents(total_wages + profile.interest_income + profile.dividend_income);
    let adjustments = 0.0;
    let adjusted_gross_income = total_income - adjustments;
    let taxable_income = round_cents((adjusted_gross_income - profile.standard_deduction).max(0.0));

    let tax = calculate_tax(taxable_income, &profile.brackets);
    let (refund, amount_owed) = if total_withheld > tax {
        (round_cents(total_withheld - tax), 0.0)
    } else {
        (0.0, round_cents(tax - total_withheld))
    };

    TaxReturn {
        tax_year: profile.tax_year,
        filing_status: profile.filing_status.clone(),
        total_wages,
        interest_income: profile.interest_income,
        dividend_income: profile.dividend_income,
        total_income,
        adjustments,
        adjusted_gross_income,
        standard_deduction: profile.standard_deduction,
        taxable_income,
        tax,
        total_withheld,
        refund,
        amount_owed,
        breakdown: bracket_breakdown(taxable_income, &profile.brackets),
        effective_rate_percent: effective_rate(tax, total_income) * 100.0,
        marginal_rate: marginal_rate(taxable_income, &profile.brackets),
    }
}
