//! Household configuration
//!
//! `HouseholdConfig` holds everything needed to generate a year of documents:
//! account details, monthly activity profiles, retirement plans, tax inputs
//! and utility providers. It is immutable once built and is passed by
//! reference into generation.
//!
//! ```ignore
//! use docforge_core::config::HouseholdConfig;
//!
//! let config = HouseholdConfig::from_yaml_str(&yaml)?;
//! let documents = docforge_core::generate_documents(&config, 42)?;
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{
    BankAccount, CheckingProfile, CustomerInfo, RetirementPlan, SavingsProfile, TaxReturnProfile,
    UtilityKind, UtilityProvider, require_finite,
};

mod household;

pub use household::doe_household;

fn default_file_prefix() -> String {
    "Statement".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdConfig {
    /// Calendar year covered by statements and bills
    pub year: i16,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    // === Banking ===
    pub checking_account: BankAccount,
    pub checking_opening_balance: f64,
    pub checking: CheckingProfile,

    pub savings_account: BankAccount,
    pub savings_opening_balance: f64,
    pub savings: SavingsProfile,

    // === Retirement & Taxes ===
    #[serde(default)]
    pub retirement_plans: Vec<RetirementPlan>,

    pub tax_return: TaxReturnProfile,

    // === Utilities ===
    pub customer: CustomerInfo,

    #[serde(default)]
    pub utilities: FxHashMap<UtilityKind, UtilityProvider>,
}

impl Default for HouseholdConfig {
    fn default() -> Self {
        doe_household()
    }
}

impl HouseholdConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_saphyr::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Check every range, day window and choice list before generation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=9999).contains(&self.year) {
            return Err(ConfigError::InvalidYear(self.year));
        }
        require_finite("checking_opening_balance", self.checking_opening_balance)?;
        require_finite("savings_opening_balance", self.savings_opening_balance)?;
        self.checking.validate()?;
        self.savings.validate()?;
        for plan in &self.retirement_plans {
            plan.validate()?;
        }
        for provider in self.utilities.values() {
            provider.validate()?;
        }
        Ok(())
    }

    /// Configured providers in a fixed order (electric, gas, water, internet)
    pub fn providers(&self) -> impl Iterator<Item = (UtilityKind, &UtilityProvider)> {
        UtilityKind::ALL
            .into_iter()
            .filter_map(|kind| self.utilities.get(&kind).map(|p| (kind, p)))
    }

    #[must_use]
    pub fn with_year(&self, year: i16) -> Self {
        let mut config = self.clone();
        config.year = year;
        config
    }
}
