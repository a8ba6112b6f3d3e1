//! Employer retirement plan definitions (401(k), 403(b))

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Annual elective deferral limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionLimits {
    pub base: f64,
    pub catch_up: f64,
    /// Participants at or above this age may add the catch-up amount
    pub catch_up_age: u8,
}

impl Default for ContributionLimits {
    /// 2024 IRS elective deferral limits
    fn default() -> Self {
        Self {
            base: 23_000.0,
            catch_up: 7_500.0,
            catch_up_age: 50,
        }
    }
}

impl ContributionLimits {
    pub fn limit_for_age(&self, age: u8) -> f64 {
        if age >= self.catch_up_age {
            self.base + self.catch_up
        } else {
            self.base
        }
    }
}

/// How a fund's unit price is determined at statement time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UnitPricing {
    /// Shares are recomputed from the allocated value at this price
    PerShare { price: f64 },
    /// A single contract unit priced at its full value (fixed annuities)
    ValuedContract,
}

/// A fund in the plan's allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanHolding {
    pub name: String,
    /// Fraction of the ending balance held in this fund
    pub weight: f64,
    pub pricing: UnitPricing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub designation: String,
    pub name: String,
    pub relationship: String,
    pub percentage: f64,
}

/// Everything needed to compute one participant's annual plan statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementPlan {
    pub plan_name: String,
    /// Short plan label used in titles and file names, e.g. "401(k)"
    pub plan_type: String,
    pub administrator: String,
    pub participant: String,
    pub account_number: String,
    pub age: u8,
    pub annual_salary: f64,
    pub beginning_balance: f64,
    /// Employee deferral as a percentage of salary, e.g. 6.0
    pub employee_contribution_pct: f64,
    /// Employer contribution as a percentage of salary
    pub employer_match_pct: f64,
    pub vesting_pct: f64,
    /// Full-year investment return applied to the average balance
    pub annual_return: f64,
    /// Annual fee as a fraction of the beginning balance
    pub fee_rate: f64,
    /// Q1..Q3 returns; Q4 absorbs whatever reconciles to the ending balance
    pub quarterly_returns: [f64; 3],
    pub holdings: Vec<PlanHolding>,
    #[serde(default)]
    pub beneficiaries: Vec<Beneficiary>,
    #[serde(default)]
    pub limits: ContributionLimits,
}

impl RetirementPlan {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.holdings.is_empty() {
            return Err(ConfigError::EmptyChoices {
                field: format!("retirement[{}].holdings", self.participant),
            });
        }
        let total: f64 = self.holdings.iter().map(|h| h.weight).sum();
        if (total - 1.0).abs() > 1e-6 {
            return Err(ConfigError::InvalidWeights {
                plan: self.plan_name.clone(),
                total,
            });
        }
        for holding in &self.holdings {
            match holding.pricing {
                UnitPricing::PerShare { price } if price <= 0.0 => {
                    return Err(ConfigError::NonPositivePrice {
                        holding: holding.name.clone(),
                        price,
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribution_limit_by_age() {
        let limits = ContributionLimits::default();
        assert_eq!(limits.limit_for_age(47), 23_000.0);
        assert_eq!(limits.limit_for_age(50), 30_500.0);
        assert_eq!(limits.limit_for_age(63), 30_500.0);
    }
}
