//! Tests for household configuration
//!
//! These tests verify:
//! - The sample household is valid
//! - YAML round-trips and parse failures
//! - Validation catches bad ranges, weights and brackets

use crate::config::HouseholdConfig;
use crate::error::{ConfigError, GenerateError};
use crate::generate::generate_documents;
use crate::model::{AmountRange, DayRange, UtilityKind};

#[test]
fn test_default_household_is_valid() {
    let config = HouseholdConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.year, 2024);
    assert_eq!(config.utilities.len(), 4);
    assert_eq!(config.providers().count(), 4);
}

#[test]
fn test_yaml_round_trip() {
    let config = HouseholdConfig::default();
    let yaml = config.to_yaml_string().unwrap();
    let parsed = HouseholdConfig::from_yaml_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_yaml_parse_error() {
    let result = HouseholdConfig::from_yaml_str("year: [2024");
    assert!(matches!(result, Err(ConfigError::Parse(_))));

    let result = HouseholdConfig::from_yaml_str("year: 2024\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_inverted_amount_range_rejected() {
    let mut config = HouseholdConfig::default();
    config.checking.variable_bills[0].amount = AmountRange::new(210.0, 140.0);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::EmptyRange { .. })
    ));
}

#[test]
fn test_infinite_amount_bound_rejected() {
    let mut config = HouseholdConfig::default();
    config.checking.variable_bills[0].amount = AmountRange::new(140.0, f64::INFINITY);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonFinite { .. })
    ));

    let result = generate_documents(&config, 1);
    assert!(matches!(
        result,
        Err(GenerateError::Config(ConfigError::NonFinite { .. }))
    ));
}

#[test]
fn test_nan_opening_balance_rejected() {
    let mut config = HouseholdConfig::default();
    config.savings_opening_balance = f64::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonFinite { .. })
    ));
}

#[test]
fn test_yaml_infinity_rejected() {
    let mut config = HouseholdConfig::default();
    config.checking.variable_bills[0].amount = AmountRange::new(140.0, 987_654.25);
    let yaml = config.to_yaml_string().unwrap();
    assert!(yaml.contains("987654.25"));

    let result = HouseholdConfig::from_yaml_str(&yaml.replace("987654.25", ".inf"));
    assert!(matches!(result, Err(ConfigError::NonFinite { .. })));
}

#[test]
fn test_serialize_error_message() {
    let err = ConfigError::Serialize("bad key".to_string());
    assert_eq!(err.to_string(), "failed to serialize configuration: bad key");
}

#[test]
fn test_bad_day_range_rejected() {
    let mut config = HouseholdConfig::default();
    config.savings.deposit.days = DayRange::new(0, 40);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidDayRange { .. })
    ));
}

#[test]
fn test_holding_weights_must_sum_to_one() {
    let mut config = HouseholdConfig::default();
    config.retirement_plans[0].holdings[0].weight = 0.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights { .. })
    ));
}

#[test]
fn test_utility_provider_validated() {
    let mut config = HouseholdConfig::default();
    if let Some(provider) = config.utilities.get_mut(&UtilityKind::Electric)
        && let crate::model::Billing::Metered { amount_range, .. } = &mut provider.billing
    {
        *amount_range = AmountRange::new(300.0, 100.0);
    }
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_year_rejected() {
    let config = HouseholdConfig::default().with_year(0);
    assert_eq!(config.validate(), Err(ConfigError::InvalidYear(0)));
}
