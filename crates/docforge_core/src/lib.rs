//! Synthetic household financial document generation
//!
//! This crate produces a year of realistic, internally consistent financial
//! records for a configured household:
//! - Monthly checking and savings statements with running balances
//! - Annual 401(k) / 403(b) retirement plan statements
//! - A Form 1040 summary computed with progressive tax brackets
//! - Monthly electric, gas, water and internet bills
//!
//! Rendering is left to the caller; every record carries its computed values
//! and a deterministic output file name.
//!
//! ```ignore
//! use docforge_core::{HouseholdConfig, generate_documents};
//!
//! let config = HouseholdConfig::default();
//! let documents = generate_documents(&config, 42)?;
//! for name in documents.file_names() {
//!     println!("{name}");
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod date_math;
pub mod error;
pub mod generate;
pub mod generators;
pub mod ledger;
pub mod logging;
pub mod money;
pub mod taxes;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::HouseholdConfig;
pub use error::{BracketError, ConfigError, GenerateError, LedgerError};
pub use generate::generate_documents;
pub use ledger::{Ledger, build_ledger};
pub use taxes::calculate_tax;
