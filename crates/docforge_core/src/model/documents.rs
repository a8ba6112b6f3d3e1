//! Generated document records
//!
//! Each record holds every number a rendered page would show, already
//! computed and rounded. File names follow a fixed pattern so a year of
//! documents always lands under the same names.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::tax::BracketSlice;
use super::transaction::AccountSummary;
use super::utility::UtilityKind;
use crate::date_math::month_name;
use crate::ledger::Ledger;
use crate::money::percent_change;

/// First and last day covered by a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementPeriod {
    pub start: Date,
    pub end: Date,
}

fn monthly_file_name(prefix: &str, label: &str, year: i16, month: i8) -> String {
    format!(
        "{prefix}_{label}_{year}_{month:02}_{}.pdf",
        month_name(month)
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckingStatement {
    pub year: i16,
    pub month: i8,
    pub account_number: String,
    pub period: StatementPeriod,
    pub ledger: Ledger,
}

impl CheckingStatement {
    pub fn summary(&self) -> AccountSummary {
        self.ledger.summary()
    }

    pub fn file_name(&self, prefix: &str) -> String {
        monthly_file_name(prefix, "Statement", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsStatement {
    pub year: i16,
    pub month: i8,
    pub account_number: String,
    pub period: StatementPeriod,
    pub apy_percent: f64,
    pub interest_earned: f64,
    pub ytd_interest: f64,
    pub ledger: Ledger,
}

impl SavingsStatement {
    pub fn summary(&self) -> AccountSummary {
        self.ledger.summary()
    }

    pub fn file_name(&self, prefix: &str) -> String {
        monthly_file_name(prefix, "Savings", self.year, self.month)
    }
}

/// Year-over-year balance reconciliation for a plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementSummary {
    pub beginning_balance: f64,
    pub employee_contributions: f64,
    pub employer_contributions: f64,
    pub investment_gain: f64,
    pub fees: f64,
    pub ending_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingValue {
    pub name: String,
    pub shares: f64,
    pub price: f64,
    pub value: f64,
    pub allocation_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterActivity {
    pub label: String,
    pub employee: f64,
    pub employer: f64,
    pub gain: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementStatement {
    pub year: i16,
    pub participant: String,
    pub plan_name: String,
    pub plan_type: String,
    pub administrator: String,
    pub account_number: String,
    pub annual_salary: f64,
    pub employee_contribution_pct: f64,
    pub employer_match_pct: f64,
    pub vesting_pct: f64,
    pub contribution_limit: f64,
    pub catch_up_eligible: bool,
    pub summary: RetirementSummary,
    pub holdings: Vec<HoldingValue>,
    pub quarters: Vec<QuarterActivity>,
    pub beneficiaries: Vec<super::retirement::Beneficiary>,
}

impl RetirementStatement {
    pub fn total_change(&self) -> f64 {
        self.summary.ending_balance - self.summary.beginning_balance
    }

    /// Percentage change over the year, 0% for an account that started empty
    pub fn change_percent(&self) -> f64 {
        percent_change(self.summary.beginning_balance, self.summary.ending_balance)
    }

    pub fn file_name(&self) -> String {
        let participant = self.participant.split_whitespace().collect::<Vec<_>>().join("_");
        let plan: String = self
            .plan_type
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        format!("{participant}_{plan}_{}_Annual_Statement.pdf", self.year)
    }
}

/// A numbered line on the return
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormLine {
    pub line: &'static str,
    pub description: &'static str,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxReturn {
    pub tax_year: i16,
    pub filing_status: String,
    pub total_wages: f64,
    pub interest_income: f64,
    pub dividend_income: f64,
    pub total_income: f64,
    pub adjustments: f64,
    pub adjusted_gross_income: f64,
    pub standard_deduction: f64,
    pub taxable_income: f64,
    pub tax: f64,
    pub total_withheld: f64,
    pub refund: f64,
    pub amount_owed: f64,
    pub breakdown: Vec<BracketSlice>,
    /// Tax as a percentage of total income
    pub effective_rate_percent: f64,
    /// Rate applied to the last dollar of taxable income
    pub marginal_rate: f64,
}

impl TaxReturn {
    /// Key Form 1040 lines in form order
    pub fn form_lines(&self) -> Vec<FormLine> {
        let line = |line, description, amount| FormLine {
            line,
            description,
            amount,
        };
        vec![
            line("1z", "Total wages", self.total_wages),
            line("2b", "Taxable interest", self.interest_income),
            line("3b", "Ordinary dividends", self.dividend_income),
            line("9", "Total income", self.total_income),
            line("10", "Adjustments to income", self.adjustments),
            line("11", "Adjusted gross income", self.adjusted_gross_income),
            line("12", "Standard deduction", self.standard_deduction),
            line("15", "Taxable income", self.taxable_income),
            line("16", "Tax", self.tax),
            line("24", "Total tax", self.tax),
            line("25a", "Federal income tax withheld", self.total_withheld),
            line("33", "Total payments", self.total_withheld),
            line("34", "Amount overpaid", self.refund),
            line("37", "Amount you owe", self.amount_owed),
        ]
    }

    pub fn file_name(&self, prefix: &str) -> String {
        format!("{prefix}_Form1040_{}_Tax_Return.pdf", self.tax_year)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeLine {
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub quantity: u32,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityBill {
    pub kind: UtilityKind,
    pub year: i16,
    pub month: i8,
    pub company: String,
    pub account_number: String,
    pub bill_date: Date,
    pub due_date: Date,
    pub service_period: StatementPeriod,
    pub usage: Option<Usage>,
    pub charges: Vec<ChargeLine>,
    pub previous_balance: f64,
    /// Current charges after clamping to the provider's plausible range
    pub total: f64,
}

impl UtilityBill {
    pub fn amount_due(&self) -> f64 {
        self.previous_balance + self.total
    }

    pub fn file_name(&self) -> String {
        monthly_file_name(self.kind.label(), "Bill", self.year, self.month)
    }
}

/// One year of generated documents for a household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSet {
    pub file_prefix: String,
    pub checking: Vec<CheckingStatement>,
    pub savings: Vec<SavingsStatement>,
    pub retirement: Vec<RetirementStatement>,
    pub tax_return: TaxReturn,
    pub utility_bills: Vec<UtilityBill>,
}

impl DocumentSet {
    pub fn document_count(&self) -> usize {
        self.checking.len()
            + self.savings.len()
            + self.retirement.len()
            + 1
            + self.utility_bills.len()
    }

    /// Output file name of every document, in generation order
    pub fn file_names(&self) -> Vec<String> {
        let prefix = self.file_prefix.as_str();
        let mut names = Vec::with_capacity(self.document_count());
        names.extend(self.checking.iter().map(|s| s.file_name(prefix)));
        names.extend(self.savings.iter().map(|s| s.file_name(prefix)));
        names.extend(self.retirement.iter().map(RetirementStatement::file_name));
        names.push(self.tax_return.file_name(prefix));
        names.extend(self.utility_bills.iter().map(UtilityBill::file_name));
        names
    }
}
