mod accounts;
mod documents;
mod retirement;
mod schedule;
mod tax;
mod transaction;
mod utility;

pub use accounts::{
    BankAccount, BudgetedSpend, CashWithdrawals, CheckingProfile, FixedExpense,
    OccasionalWithdrawal, PayDay, Paycheck, SavingsProfile, ScheduledTransfer, SpendingCategory,
    VariableBill, WithdrawalReason,
};
pub use documents::{
    ChargeLine, CheckingStatement, DocumentSet, FormLine, HoldingValue, QuarterActivity,
    RetirementStatement, RetirementSummary, SavingsStatement, StatementPeriod, TaxReturn, Usage,
    UtilityBill,
};
pub use retirement::{Beneficiary, ContributionLimits, PlanHolding, RetirementPlan, UnitPricing};
pub use schedule::{AmountRange, CountRange, DayRange, require_finite};
pub use tax::{BracketSlice, BracketTable, TaxBracket, TaxReturnProfile, Taxpayer, WageStatement};
pub use transaction::{AccountSummary, LedgerEntry, Transaction};
pub use utility::{
    Billing, CustomerInfo, Season, SeasonalUsage, Surcharge, UtilityKind, UtilityProvider,
};
