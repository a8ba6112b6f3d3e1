//! Tax bracket table types
//!
//! Defines the progressive bracket table and the filing profile used to
//! produce a return. The calculation logic lives in the `taxes` module.

use serde::{Deserialize, Serialize};

use crate::error::BracketError;

/// A single bracket in a progressive tax system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Income ceiling of this bracket; `None` means the bracket has no ceiling
    #[serde(default)]
    pub upper_bound: Option<f64>,
    /// Marginal tax rate for income in this bracket (e.g., 0.22 for 22%)
    pub rate: f64,
}

impl TaxBracket {
    #[must_use]
    pub fn capped(upper_bound: f64, rate: f64) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    #[must_use]
    pub fn unbounded(rate: f64) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }

    /// Upper bound as a number, with `f64::INFINITY` for the open top bracket
    #[inline]
    pub fn ceiling(&self) -> f64 {
        self.upper_bound.unwrap_or(f64::INFINITY)
    }
}

/// Validated, ascending progressive bracket table
///
/// Finite upper bounds are positive and strictly increasing, every rate is in
/// `[0, 1]`, and only the last bracket may be unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, BracketError> {
        if brackets.is_empty() {
            return Err(BracketError::Empty);
        }

        let last_index = brackets.len() - 1;
        let mut previous = 0.0;
        for (index, bracket) in brackets.iter().enumerate() {
            if !(0.0..=1.0).contains(&bracket.rate) {
                return Err(BracketError::RateOutOfRange {
                    index,
                    rate: bracket.rate,
                });
            }
            match bracket.upper_bound {
                None if index != last_index => {
                    return Err(BracketError::UnboundedNotLast { index });
                }
                None => {}
                Some(bound) if bound <= 0.0 || bound.is_nan() => {
                    return Err(BracketError::NonPositiveBound { index, bound });
                }
                Some(bound) if index > 0 && bound <= previous => {
                    return Err(BracketError::NonIncreasingBound {
                        index,
                        bound,
                        previous,
                    });
                }
                Some(bound) => previous = bound,
            }
        }

        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// 2023 US federal brackets, married filing jointly
    #[must_use]
    pub fn us_federal_2023_mfj() -> Self {
        Self {
            brackets: vec![
                TaxBracket::capped(22_000.0, 0.10),
                TaxBracket::capped(89_450.0, 0.12),
                TaxBracket::capped(190_750.0, 0.22),
                TaxBracket::capped(364_200.0, 0.24),
                TaxBracket::capped(462_500.0, 0.32),
                TaxBracket::capped(693_750.0, 0.35),
                TaxBracket::unbounded(0.37),
            ],
        }
    }
}

impl Default for BracketTable {
    fn default() -> Self {
        Self::us_federal_2023_mfj()
    }
}

impl TryFrom<Vec<TaxBracket>> for BracketTable {
    type Error = BracketError;

    fn try_from(brackets: Vec<TaxBracket>) -> Result<Self, Self::Error> {
        Self::new(brackets)
    }
}

impl From<BracketTable> for Vec<TaxBracket> {
    fn from(table: BracketTable) -> Self {
        table.brackets
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxpayer {
    pub name: String,
    pub occupation: String,
}

/// Wage statement for one job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageStatement {
    pub employee: String,
    pub employer: String,
    pub wages: f64,
    pub federal_withheld: f64,
}

/// Inputs for an individual income tax return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxReturnProfile {
    pub tax_year: i16,
    pub filing_status: String,
    pub primary: Taxpayer,
    #[serde(default)]
    pub spouse: Option<Taxpayer>,
    pub wage_statements: Vec<WageStatement>,
    #[serde(default)]
    pub interest_income: f64,
    #[serde(default)]
    pub dividend_income: f64,
    pub standard_deduction: f64,
    #[serde(default)]
    pub brackets: BracketTable,
}

/// The slice of income taxed inside one bracket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BracketSlice {
    /// Income level where the bracket starts
    pub lower: f64,
    /// Income ceiling of the bracket (`None` for the open top bracket)
    pub upper: Option<f64>,
    pub rate: f64,
    /// Portion of income falling inside this bracket
    pub taxable: f64,
    /// `taxable * rate`, unrounded
    pub tax: f64,
}
