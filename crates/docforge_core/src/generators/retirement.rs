//! Annual employer retirement plan statement
//!
//! Fully deterministic: contributions, gains and fees follow from the plan
//! parameters alone.

use crate::model::{
    HoldingValue, PlanHolding, QuarterActivity, RetirementPlan, RetirementStatement,
    RetirementSummary, UnitPricing,
};
use crate::money::{percent_of, round_cents, round_to};

/// Year-end reconciliation: contributions, gain on the average balance, fees
pub fn plan_summary(plan: &RetirementPlan) -> RetirementSummary {
    let beginning = plan.beginning_balance;
    let employee = round_cents(plan.annual_salary * plan.employee_contribution_pct / 100.0);
    let employer = round_cents(plan.annual_salary * plan.employer_match_pct / 100.0);

    // Contributions arrive evenly, so on average half of them are invested
    let average_balance = beginning + (employee + employer) / 2.0;
    let investment_gain = round_cents(average_balance * plan.annual_return);
    let fees = round_cents(beginning * plan.fee_rate);
    let ending_balance = round_cents(beginning + employee + employer + investment_gain - fees);

    RetirementSummary {
        beginning_balance: beginning,
        employee_contributions: employee,
        employer_contributions: employer,
        investment_gain,
        fees,
        ending_balance,
    }
}

/// Split the ending balance across the plan's funds
pub fn holding_values(holdings: &[PlanHolding], ending_balance: f64) -> Vec<HoldingValue> {
    let mut values: Vec<HoldingValue> = holdings
        .iter()
        .map(|holding| {
            let value = round_cents(ending_balance * holding.weight);
            let (shares, price) = match holding.pricing {
                UnitPricing::PerShare { price } => (round_to(value / price, 3), price),
                UnitPricing::ValuedContract => (1.0, value),
            };
            HoldingValue {
                name: holding.name.clone(),
                shares,
                price,
                value,
                allocation_percent: 0.0,
            }
        })
        .collect();

    let total: f64 = values.iter().map(|v| v.value).sum();
    for v in &mut values {
        v.allocation_percent = percent_of(v.value, total);
    }
    values
}

/// Quarter-by-quarter activity
///
/// Q1..Q3 gains come from the configured quarterly returns; Q4 takes the
/// remainder so the final quarter closes on the year-end balance.
pub fn quarterly_activity(
    plan: &RetirementPlan,
    summary: &RetirementSummary,
    year: i16,
) -> Vec<QuarterActivity> {
    let employee = summary.employee_contributions / 4.0;
    let employer = summary.employer_contributions / 4.0;

    let mut quarters = Vec::with_capacity(4);
    let mut balance = summary.beginning_balance;
    for (index, rate) in plan.quarterly_returns.iter().enumerate() {
        let gain = round_cents(balance * rate);
        balance = round_cents(balance + employee + employer + gain);
        quarters.push(QuarterActivity {
            label: format!("Q{} {year}", index + 1),
            employee: round_cents(employee),
            employer: round_cents(employer),
            gain,
            balance,
        });
    }

    let q4_gain = round_cents(summary.ending_balance - balance - employee - employer);
    quarters.push(QuarterActivity {
        label: format!("Q4 {year}"),
        employee: round_cents(employee),
        employer: round_cents(employer),
        gain: q4_gain,
        balance: summary.ending_balance,
    });
    quarters
}

pub fn retirement_statement(plan: &RetirementPlan, year: i16) -> RetirementStatement {
    let summary = plan_summary(plan);
    let holdings = holding_values(&plan.holdings, summary.ending_balance);
    let quarters = quarterly_activity(plan, &summary, year);

    RetirementStatement {
        year,
        participant: plan.participant.clone(),
        plan_name: plan.plan_name.clone(),
        plan_type: plan.plan_type.clone(),
        administrator: plan.administrator.clone(),
        account_number: plan.account_number.clone(),
        annual_salary: plan.annual_salary,
        employee_contribution_pct: plan.employee_contribution_pct,
        employer_match_pct: plan.employer_match_pct,
        vesting_pct: plan.vesting_pct,
        contribution_limit: plan.limits.limit_for_age(plan.age),
        catch_up_eligible: plan.age >= plan.limits.catch_up_age,
        summary,
        holdings,
        quarters,
        beneficiaries: plan.beneficiaries.clone(),
    }
}
