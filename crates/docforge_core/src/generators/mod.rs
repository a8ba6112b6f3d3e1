//! Per-document generators
//!
//! Random generators take the RNG explicitly; retirement statements and tax
//! returns are pure functions of their inputs.

mod checking;
mod retirement;
mod savings;
mod tax_return;
mod utility;

pub use checking::{budgeted_debits, checking_statement, checking_transactions};
pub use retirement::{holding_values, plan_summary, quarterly_activity, retirement_statement};
pub use savings::savings_statement;
pub use tax_return::tax_return;
pub use utility::{DUE_AFTER_DAYS, FLAT_CYCLE_DAYS, utility_bill};
