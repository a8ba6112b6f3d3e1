//! Tests for progressive tax properties
//!
//! These tests verify:
//! - Tax never decreases as income grows
//! - Tax is continuous across every bracket boundary
//! - The bracket breakdown accounts for all taxable income

use crate::model::{BracketTable, TaxBracket};
use crate::taxes::{bracket_breakdown, calculate_tax, marginal_rate};

#[test]
fn test_tax_monotone_in_income() {
    let table = BracketTable::us_federal_2023_mfj();
    let mut previous = 0.0;
    let mut income = 0.0;
    while income < 900_000.0 {
        let tax = calculate_tax(income, &table);
        assert!(tax >= previous, "tax fell from {previous} to {tax} at {income}");
        previous = tax;
        income += 137.77;
    }
}

#[test]
fn test_tax_continuous_at_boundaries() {
    let table = BracketTable::us_federal_2023_mfj();
    for bracket in table.brackets() {
        let Some(bound) = bracket.upper_bound else {
            continue;
        };
        let below = calculate_tax(bound - 0.01, &table);
        let at = calculate_tax(bound, &table);
        let above = calculate_tax(bound + 0.01, &table);
        assert!(at - below <= 0.01 + 1e-9, "jump below {bound}: {below} -> {at}");
        assert!(above - at <= 0.01 + 1e-9, "jump above {bound}: {at} -> {above}");
    }
}

#[test]
fn test_two_bracket_example() {
    let table = BracketTable::new(vec![
        TaxBracket::capped(22_000.0, 0.10),
        TaxBracket::capped(89_450.0, 0.12),
    ])
    .unwrap();
    let tax = calculate_tax(30_000.0, &table);
    assert!((tax - 3_160.0).abs() < 0.005, "Expected 3160, got {tax}");
}

#[test]
fn test_breakdown_covers_income() {
    let table = BracketTable::us_federal_2023_mfj();
    for income in [0.0, 15_000.0, 22_000.0, 150_000.0, 750_000.0] {
        let slices = bracket_breakdown(income, &table);
        let taxable: f64 = slices.iter().map(|s| s.taxable).sum();
        assert!((taxable - income).abs() < 1e-6, "income {income}");

        let last = slices.last().unwrap();
        assert_eq!(last.rate, marginal_rate(income, &table));
    }
}
