//! Full-year document generation
//!
//! A single `u64` seed drives everything. The master RNG hands out one seed
//! per stream (checking, savings, utilities) so adding a utility provider
//! never changes the bank statements, and every utility bill gets its own
//! pre-derived seed so they can be produced in parallel.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

use crate::config::HouseholdConfig;
use crate::error::Result;
use crate::generators::{
    checking_statement, retirement_statement, savings_statement, tax_return, utility_bill,
};
use crate::model::{
    CheckingStatement, DocumentSet, SavingsStatement, UtilityBill, UtilityKind, UtilityProvider,
};

/// Independent seeds for each random stream of a generated year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSeeds {
    pub checking: u64,
    pub savings: u64,
    pub utilities: u64,
}

impl StreamSeeds {
    pub fn derive(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            checking: rng.next_u64(),
            savings: rng.next_u64(),
            utilities: rng.next_u64(),
        }
    }
}

/// Generate twelve chained checking statements
///
/// Each month opens on the previous month's closing balance.
pub fn checking_year(config: &HouseholdConfig, seed: u64) -> Result<Vec<CheckingStatement>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut balance = config.checking_opening_balance;
    let mut statements = Vec::with_capacity(12);

    for month in 1..=12 {
        let statement = checking_statement(
            &config.checking_account,
            &config.checking,
            config.year,
            month,
            balance,
            &mut rng,
        )?;
        debug!(
            month,
            opening = balance,
            closing = statement.ledger.closing_balance(),
            transactions = statement.ledger.len(),
            "checking statement"
        );
        balance = statement.ledger.closing_balance();
        statements.push(statement);
    }
    Ok(statements)
}

/// Generate twelve chained savings statements with year-to-date interest
pub fn savings_year(config: &HouseholdConfig, seed: u64) -> Result<Vec<SavingsStatement>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut balance = config.savings_opening_balance;
    let mut ytd_interest = 0.0;
    let mut statements = Vec::with_capacity(12);

    for month in 1..=12 {
        let statement = savings_statement(
            &config.savings_account,
            &config.savings,
            config.year,
            month,
            balance,
            ytd_interest,
            &mut rng,
        )?;
        debug!(
            month,
            opening = balance,
            closing = statement.ledger.closing_balance(),
            interest = statement.interest_earned,
            "savings statement"
        );
        balance = statement.ledger.closing_balance();
        ytd_interest = statement.ytd_interest;
        statements.push(statement);
    }
    Ok(statements)
}

/// Generate every provider's bill for every month, ordered by month then provider
pub fn utility_year(config: &HouseholdConfig, seed: u64) -> Result<Vec<UtilityBill>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let jobs: Vec<(i8, UtilityKind, &UtilityProvider, u64)> = (1..=12)
        .flat_map(|month| config.providers().map(move |(kind, p)| (month, kind, p)))
        .map(|(month, kind, provider)| (month, kind, provider, rng.next_u64()))
        .collect();

    let year = config.year;
    let bill = |&(month, kind, provider, bill_seed): &(i8, UtilityKind, &UtilityProvider, u64)| {
        let mut rng = StdRng::seed_from_u64(bill_seed);
        utility_bill(kind, provider, year, month, &mut rng)
    };

    #[cfg(feature = "parallel")]
    let bills: Result<Vec<UtilityBill>> = jobs.par_iter().map(bill).collect();

    #[cfg(not(feature = "parallel"))]
    let bills: Result<Vec<UtilityBill>> = jobs.iter().map(bill).collect();

    bills
}

/// Generate a full year of documents for `config`
///
/// Identical `(config, seed)` pairs always produce identical document sets.
pub fn generate_documents(config: &HouseholdConfig, seed: u64) -> Result<DocumentSet> {
    config.validate()?;
    let seeds = StreamSeeds::derive(seed);

    info!(year = config.year, seed, "generating household documents");

    let checking = checking_year(config, seeds.checking)?;
    let savings = savings_year(config, seeds.savings)?;

    let retirement: Vec<_> = config
        .retirement_plans
        .iter()
        .map(|plan| retirement_statement(plan, config.year))
        .collect();

    let tax_return = tax_return(&config.tax_return);
    let utility_bills = utility_year(config, seeds.utilities)?;

    let documents = DocumentSet {
        file_prefix: config.file_prefix.clone(),
        checking,
        savings,
        retirement,
        tax_return,
        utility_bills,
    };

    info!(
        documents = documents.document_count(),
        retirement_plans = documents.retirement.len(),
        utility_bills = documents.utility_bills.len(),
        refund = documents.tax_return.refund,
        amount_owed = documents.tax_return.amount_owed,
        "generated household documents"
    );

    Ok(documents)
}
