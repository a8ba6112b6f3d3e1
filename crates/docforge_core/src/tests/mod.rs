//! Integration tests for household document generation
//!
//! Tests are organized by topic:
//! - `ledger_properties` - Posting order and running-balance invariants
//! - `tax_properties` - Progressive tax monotonicity and continuity
//! - `year_generation` - Full-year generation, chaining and determinism
//! - `household_config` - Configuration validation and YAML parsing

mod household_config;
mod tax_properties;
