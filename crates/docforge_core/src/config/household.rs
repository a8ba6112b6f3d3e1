//! Sample household: Bob and Jane Doe of Nashville, TN

use rustc_hash::FxHashMap;

use super::HouseholdConfig;
use crate::model::{
    AmountRange, BankAccount, Beneficiary, Billing, BracketTable, BudgetedSpend, CashWithdrawals,
    CheckingProfile, ContributionLimits, CountRange, CustomerInfo, DayRange, FixedExpense,
    OccasionalWithdrawal, PayDay, Paycheck, PlanHolding, RetirementPlan, SavingsProfile,
    ScheduledTransfer, Season, SeasonalUsage, SpendingCategory, Surcharge, TaxReturnProfile,
    Taxpayer, UnitPricing, UtilityKind, UtilityProvider, VariableBill, WageStatement,
    WithdrawalReason,
};

const BANK_NAME: &str = "First National Bank of Nashville";
const HOLDERS: &str = "Bob Doe & Jane Doe";
const ADDRESS: &str = "456 Maple Street, Nashville, TN 37215";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn fixed(description: &str, amount: f64, day: i8) -> FixedExpense {
    FixedExpense {
        description: description.into(),
        amount,
        day,
    }
}

fn category(
    name: &str,
    merchants: &[&str],
    visits: (u32, u32),
    amount: (f64, f64),
) -> SpendingCategory {
    SpendingCategory {
        name: name.into(),
        prefix: "POS Purchase".into(),
        merchants: strings(merchants),
        visits: CountRange::new(visits.0, visits.1),
        amount: AmountRange::new(amount.0, amount.1),
    }
}

fn holding(name: &str, weight: f64, pricing: UnitPricing) -> PlanHolding {
    PlanHolding {
        name: name.into(),
        weight,
        pricing,
    }
}

fn spouse_beneficiary(name: &str) -> Vec<Beneficiary> {
    vec![Beneficiary {
        designation: "Primary".into(),
        name: name.into(),
        relationship: "Spouse".into(),
        percentage: 100.0,
    }]
}

fn checking_profile() -> CheckingProfile {
    CheckingProfile {
        pay_days: vec![PayDay::Day { day: 15 }, PayDay::LastDay],
        paychecks: vec![
            Paycheck {
                description: "Direct Deposit - ACME TECHNOLOGY CORP".into(),
                amount: 2_853.43,
            },
            Paycheck {
                description: "Direct Deposit - METRO NASHVILLE SCHOOLS".into(),
                amount: 1_982.39,
            },
        ],
        fixed_expenses: vec![
            fixed("Mortgage w/Escrow - First TN Bank", 2_215.27, 1),
            fixed("Auto Insurance - State Farm", 233.00, 5),
            fixed("Life Insurance - Northwestern", 85.00, 10),
            fixed("Internet - Comcast", 75.00, 8),
            fixed("Cell Phone - Verizon", 140.00, 12),
            fixed("Health Insurance Premium", 350.00, 1),
            fixed("Ford Motor Credit - Auto Loan", 504.00, 15),
            fixed("Harley Davidson Financial", 385.00, 10),
            fixed("Progressive MC Insurance", 75.00, 10),
            fixed("Streaming - Netflix", 15.99, 7),
            fixed("Streaming - Hulu", 17.99, 7),
            fixed("Streaming - Disney+", 13.99, 12),
            fixed("Gym - Planet Fitness", 49.99, 3),
        ],
        variable_bills: vec![
            VariableBill {
                description: "Nashville Electric Service".into(),
                amount: AmountRange::new(140.0, 210.0),
                days: DayRange::new(15, 20),
            },
            VariableBill {
                description: "Piedmont Natural Gas".into(),
                amount: AmountRange::new(45.0, 85.0),
                days: DayRange::new(18, 22),
            },
            VariableBill {
                description: "Metro Water Services".into(),
                amount: AmountRange::new(50.0, 65.0),
                days: DayRange::new(10, 15),
            },
        ],
        spending: vec![
            category(
                "groceries",
                &[
                    "Kroger",
                    "Publix",
                    "Whole Foods",
                    "Trader Joe's",
                    "Costco",
                    "Walmart Grocery",
                ],
                (4, 6),
                (85.0, 220.0),
            ),
            category(
                "gas_stations",
                &["Shell Oil", "Exxon", "BP", "Mapco", "Speedway"],
                (6, 10),
                (35.0, 75.0),
            ),
            category(
                "dining",
                &[
                    "Chick-fil-A",
                    "Panera Bread",
                    "Chipotle",
                    "Olive Garden",
                    "Cracker Barrel",
                    "Starbucks",
                    "McDonald's",
                    "Wendy's",
                    "Local Bistro",
                    "DoorDash",
                    "Uber Eats",
                ],
                (8, 12),
                (12.0, 85.0),
            ),
            category(
                "shopping",
                &[
                    "Amazon.com",
                    "Target",
                    "Walmart",
                    "Home Depot",
                    "Lowe's",
                    "TJ Maxx",
                    "Kohl's",
                    "Best Buy",
                ],
                (3, 6),
                (25.0, 150.0),
            ),
            category(
                "other",
                &[
                    "CVS Pharmacy",
                    "Walgreens",
                    "Great Clips",
                    "PetSmart",
                    "Dollar General",
                ],
                (2, 4),
                (15.0, 60.0),
            ),
        ],
        cash_withdrawals: Some(CashWithdrawals {
            description: "ATM Withdrawal - First National Bank".into(),
            denominations: vec![40.0, 60.0, 80.0, 100.0, 120.0],
            visits: CountRange::new(1, 3),
        }),
        savings_transfer: Some(ScheduledTransfer {
            description: "Transfer to Savings ****9821".into(),
            amount: 500.0,
            days: DayRange::new(16, 20),
        }),
        budgeted_spend: Some(BudgetedSpend {
            description: "DraftKings".into(),
            monthly_target: 700.0,
            chunk: AmountRange::new(15.0, 75.0),
            settle_below: 25.0,
        }),
    }
}

fn savings_profile() -> SavingsProfile {
    let reason = |description: &str, min: f64, max: f64| WithdrawalReason {
        description: description.into(),
        amount: AmountRange::new(min, max),
    };
    SavingsProfile {
        apy_percent: 4.25,
        deposit: ScheduledTransfer {
            description: "Transfer from Checking ****4827".into(),
            amount: 500.0,
            days: DayRange::new(16, 20),
        },
        interest_description: "Interest Payment".into(),
        withdrawal: Some(OccasionalWithdrawal {
            probability: 0.30,
            reasons: vec![
                reason("Transfer to Checking - Car Repair", 200.0, 600.0),
                reason("Transfer to Checking - Medical", 150.0, 400.0),
                reason("Transfer to Checking - Home Repair", 300.0, 800.0),
                reason("Transfer to Checking - Holiday Shopping", 200.0, 500.0),
                reason("Transfer to Checking - Vacation", 400.0, 1_000.0),
            ],
            margin_days: 5,
        }),
    }
}

fn retirement_plans() -> Vec<RetirementPlan> {
    vec![
        RetirementPlan {
            plan_name: "Acme Technology Corp 401(k) Plan".into(),
            plan_type: "401(k)".into(),
            administrator: "Fidelity Investments".into(),
            participant: "Bob Doe".into(),
            account_number: "Z4827-401K-0001".into(),
            age: 47,
            annual_salary: 95_000.0,
            beginning_balance: 142_500.0,
            employee_contribution_pct: 6.0,
            employer_match_pct: 4.0,
            vesting_pct: 100.0,
            annual_return: 0.118,
            fee_rate: 0.0015,
            quarterly_returns: [0.028, 0.032, 0.015],
            holdings: vec![
                holding(
                    "Fidelity Freedom 2045 Fund",
                    0.60,
                    UnitPricing::PerShare { price: 15.82 },
                ),
                holding(
                    "Fidelity 500 Index Fund",
                    0.20,
                    UnitPricing::PerShare { price: 178.45 },
                ),
                holding(
                    "Fidelity Total Bond Index",
                    0.10,
                    UnitPricing::PerShare { price: 10.25 },
                ),
                holding(
                    "Fidelity International Index",
                    0.07,
                    UnitPricing::PerShare { price: 12.34 },
                ),
                holding(
                    "Fidelity Money Market",
                    0.03,
                    UnitPricing::PerShare { price: 1.00 },
                ),
            ],
            beneficiaries: spouse_beneficiary("Jane Doe"),
            limits: ContributionLimits::default(),
        },
        RetirementPlan {
            plan_name: "Metro Nashville Public Schools 403(b) Plan".into(),
            plan_type: "403(b)".into(),
            administrator: "TIAA".into(),
            participant: "Jane Doe".into(),
            account_number: "T9821-403B-0001".into(),
            age: 45,
            annual_salary: 65_000.0,
            beginning_balance: 98_750.0,
            employee_contribution_pct: 8.0,
            employer_match_pct: 3.0,
            vesting_pct: 100.0,
            annual_return: 0.105,
            fee_rate: 0.0020,
            quarterly_returns: [0.025, 0.030, 0.012],
            holdings: vec![
                holding(
                    "TIAA-CREF Lifecycle 2045 Fund",
                    0.50,
                    UnitPricing::PerShare { price: 14.25 },
                ),
                holding(
                    "TIAA-CREF Equity Index Fund",
                    0.20,
                    UnitPricing::PerShare { price: 32.18 },
                ),
                holding("TIAA Traditional Annuity", 0.15, UnitPricing::ValuedContract),
                holding(
                    "TIAA-CREF Bond Index Fund",
                    0.10,
                    UnitPricing::PerShare { price: 9.87 },
                ),
                holding(
                    "TIAA-CREF International Equity",
                    0.05,
                    UnitPricing::PerShare { price: 18.45 },
                ),
            ],
            beneficiaries: spouse_beneficiary("Bob Doe"),
            limits: ContributionLimits::default(),
        },
    ]
}

fn tax_return_profile() -> TaxReturnProfile {
    TaxReturnProfile {
        tax_year: 2023,
        filing_status: "Married Filing Jointly".into(),
        primary: Taxpayer {
            name: "Bob Doe".into(),
            occupation: "Security Guard".into(),
        },
        spouse: Some(Taxpayer {
            name: "Jane Doe".into(),
            occupation: "Teacher".into(),
        }),
        wage_statements: vec![
            WageStatement {
                employee: "Bob Doe".into(),
                employer: "Acme Technology Corp".into(),
                wages: 95_000.0,
                federal_withheld: 14_250.0,
            },
            WageStatement {
                employee: "Jane Doe".into(),
                employer: "Metro Nashville Public Schools".into(),
                wages: 65_000.0,
                federal_withheld: 8_450.0,
            },
        ],
        interest_income: 385.0,
        dividend_income: 0.0,
        standard_deduction: 27_700.0,
        brackets: BracketTable::us_federal_2023_mfj(),
    }
}

fn provider(
    company: &str,
    account_number: &str,
    phone: &str,
    billing: Billing,
) -> UtilityProvider {
    UtilityProvider {
        company: company.into(),
        account_number: account_number.into(),
        service_address: ADDRESS.into(),
        phone: phone.into(),
        billing,
    }
}

fn utilities() -> FxHashMap<UtilityKind, UtilityProvider> {
    let mut providers = FxHashMap::default();

    providers.insert(
        UtilityKind::Electric,
        provider(
            "Nashville Electric Service",
            "8429-3756-4821",
            "1-888-NES-ELECTRIC",
            Billing::Metered {
                bill_days: DayRange::new(15, 20),
                amount_range: AmountRange::new(140.0, 210.0),
                usage_unit: "kWh".into(),
                usage: SeasonalUsage {
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
                },
                rate_per_unit: 0.12,
                base_charge_label: "Base Service Charge".into(),
                base_charge: 18.50,
                usage_charge_label: "Energy Charge".into(),
                surcharges: vec![],
            },
        ),
    );

    providers.insert(
        UtilityKind::Gas,
        provider(
            "Piedmont Natural Gas",
            "6912-4387-9021",
            "1-800-752-7504",
            Billing::Metered {
                bill_days: DayRange::new(18, 22),
                amount_range: AmountRange::new(45.0, 85.0),
                usage_unit: "Therms".into(),
                usage: SeasonalUsage {
                    base: 0,
                    seasons: vec![
                        Season {
                            months: vec![11, 12, 1, 2, 3],
                            extra: (45, 65),
                        },
                        Season {
                            months: vec![6, 7, 8, 9],
                            extra: (8, 15),
                        },
                    ],
                    default_extra: (20, 35),
                },
                rate_per_unit: 1.15,
                base_charge_label: "Customer Charge".into(),
                base_charge: 12.00,
                usage_charge_label: "Gas Supply".into(),
                surcharges: vec![],
            },
        ),
    );

    providers.insert(
        UtilityKind::Water,
        provider(
            "Metro Water Services",
            "4521-8936-7104",
            "(615) 862-4600",
            Billing::Metered {
                bill_days: DayRange::new(10, 15),
                amount_range: AmountRange::new(50.0, 65.0),
                usage_unit: "CCF".into(),
                usage: SeasonalUsage {
                    base: 8,
                    seasons: vec![],
                    default_extra: (0, 4),
                },
                rate_per_unit: 4.82,
                base_charge_label: "Base Service Charge".into(),
                base_charge: 8.50,
                usage_charge_label: "Water Usage".into(),
                surcharges: vec![Surcharge {
                    label: "Sewer Charges".into(),
                    rate_per_unit: 5.20,
                }],
            },
        ),
    );

    providers.insert(
        UtilityKind::Internet,
        provider(
            "Comcast Xfinity",
            "8482-9357-1046-2845",
            "1-800-COMCAST",
            Billing::Flat {
                bill_day: 8,
                amount: 75.00,
                plan: "Xfinity Performance Pro+ (200 Mbps)".into(),
            },
        ),
    );

    providers
}

fn bank_account(account_number: &str, account_type: &str) -> BankAccount {
    BankAccount {
        bank_name: BANK_NAME.into(),
        account_holder: HOLDERS.into(),
        account_number: account_number.into(),
        routing_number: "064000017".into(),
        account_type: account_type.into(),
        address: ADDRESS.into(),
    }
}

/// The sample Doe household for 2024
pub fn doe_household() -> HouseholdConfig {
    HouseholdConfig {
        year: 2024,
        file_prefix: "DoE".into(),
        checking_account: bank_account("****4827", "Joint Checking"),
        checking_opening_balance: 3_500.0,
        checking: checking_profile(),
        savings_account: bank_account("****9821", "High-Yield Savings"),
        savings_opening_balance: 8_500.0,
        savings: savings_profile(),
        retirement_plans: retirement_plans(),
        tax_return: tax_return_profile(),
        customer: CustomerInfo {
            name: HOLDERS.into(),
            address: "456 Maple Street".into(),
            city_state_zip: "Nashville, TN 37215".into(),
            phone: "(615) 555-0123".into(),
        },
        utilities: utilities(),
    }
}
