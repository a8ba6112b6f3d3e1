//! Utility providers and their billing models

use serde::{Deserialize, Serialize};

use super::schedule::{AmountRange, DayRange};
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UtilityKind {
    Electric,
    Gas,
    Water,
    Internet,
}

impl UtilityKind {
    pub const ALL: [UtilityKind; 4] = [
        UtilityKind::Electric,
        UtilityKind::Gas,
        UtilityKind::Water,
        UtilityKind::Internet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UtilityKind::Electric => "Electric",
            UtilityKind::Gas => "Gas",
            UtilityKind::Water => "Water",
            UtilityKind::Internet => "Internet",
        }
    }
}

/// The household being billed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub address: String,
    pub city_state_zip: String,
    pub phone: String,
}

/// Extra usage range applied during a set of months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub months: Vec<i8>,
    pub extra: (u32, u32),
}

/// Monthly usage = base + a seasonal extra drawn uniformly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalUsage {
    pub base: u32,
    #[serde(default)]
    pub seasons: Vec<Season>,
    /// Extra range for months not covered by any season
    pub default_extra: (u32, u32),
}

impl SeasonalUsage {
    /// Extra-usage range in effect for `month`
    pub fn extra_for(&self, month: i8) -> (u32, u32) {
        self.seasons
            .iter()
            .find(|s| s.months.contains(&month))
            .map(|s| s.extra)
            .unwrap_or(self.default_extra)
    }
}

/// A per-unit charge billed on top of the usage charge (e.g. sewer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surcharge {
    pub label: String,
    pub rate_per_unit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Billing {
    /// Usage-based billing, clamped to a plausible amount range
    Metered {
        bill_days: DayRange,
        amount_range: AmountRange,
        usage_unit: String,
        usage: SeasonalUsage,
        rate_per_unit: f64,
        base_charge_label: String,
        base_charge: f64,
        usage_charge_label: String,
        #[serde(default)]
        surcharges: Vec<Surcharge>,
    },
    /// A flat monthly plan
    Flat {
        bill_day: i8,
        amount: f64,
        plan: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityProvider {
    pub company: String,
    pub account_number: String,
    pub service_address: String,
    pub phone: String,
    pub billing: Billing,
}

impl UtilityProvider {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.billing {
            Billing::Metered {
                bill_days,
                amount_range,
                usage,
                ..
            } => {
                bill_days.validate(&self.company)?;
                amount_range.validate(&self.company)?;
                for (min, max) in usage
                    .seasons
                    .iter()
                    .map(|s| s.extra)
                    .chain(std::iter::once(usage.default_extra))
                {
                    if min > max || usage.base.checked_add(max).is_none() {
                        return Err(ConfigError::EmptyRange {
                            field: format!("{}.usage", self.company),
                            min: f64::from(min),
                            max: f64::from(max),
                        });
                    }
                }
                Ok(())
            }
            Billing::Flat { bill_day, .. } => {
                DayRange::new(*bill_day, *bill_day).validate(&self.company)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn electric_usage() -> SeasonalUsage {
        SeasonalUsage {
            base: 950,
            seasons: vec![
                Season {
                    months: vec![6, 7, 8],
                    extra: (400, 800),
                },
                Season {
                    months: vec![12, 1, 2],
                    extra: (200, 400),
                },
            ],
            default_extra: (50, 200),
        }
    }

    #[test]
    fn test_seasonal_extra_lookup() {
        let usage = electric_usage();
        assert_eq!(usage.extra_for(7), (400, 800));
        assert_eq!(usage.extra_for(1), (200, 400));
        assert_eq!(usage.extra_for(4), (50, 200));
    }

    #[test]
    fn test_inverted_usage_range_rejected() {
        let mut usage = electric_usage();
        usage.default_extra = (200, 50);
        let provider = UtilityProvider {
            company: "Electric Co".to_string(),
            account_number: "1".to_string(),
            service_address: "here".to_string(),
            phone: "555".to_string(),
            billing: Billing::Metered {
                bill_days: DayRange::new(15, 20),
                amount_range: AmountRange::new(140.0, 210.0),
                usage_unit: "kWh".to_string(),
                usage,
                rate_per_unit: 0.12,
                base_charge_label: "Base Service Charge".to_string(),
                base_charge: 18.5,
                usage_charge_label: "Energy Charge".to_string(),
                surcharges: vec![],
            },
        };
        assert!(provider.validate().is_err());
    }

    #[test]
    fn test_usage_overflowing_u32_rejected() {
        let mut usage = electric_usage();
        usage.base = u32::MAX - 10;
        let provider = UtilityProvider {
            company: "Electric Co".to_string(),
            account_number: "1".to_string(),
            service_address: "here".to_string(),
            phone: "555".to_string(),
            billing: Billing::Metered {
                bill_days: DayRange::new(15, 20),
                amount_range: AmountRange::new(140.0, 210.0),
                usage_unit: "kWh".to_string(),
                usage,
                rate_per_unit: 0.12,
                base_charge_label: "Base Service Charge".to_string(),
                base_charge: 18.5,
                usage_charge_label: "Energy Charge".to_string(),
                surcharges: vec![],
            },
        };
        assert!(matches!(
            provider.validate(),
            Err(ConfigError::EmptyRange { .. })
        ));
    }
}
