//! Monthly utility bills

use rand::Rng;

use crate::date_math::{add_days, month_date, previous_month};
use crate::error::Result;
use crate::model::{
    Billing, ChargeLine, StatementPeriod, Usage, UtilityBill, UtilityKind, UtilityProvider,
};
use crate::money::round_cents;

/// Days between the bill date and the payment due date
pub const DUE_AFTER_DAYS: i32 = 21;

/// Length of a flat-rate billing cycle
pub const FLAT_CYCLE_DAYS: i32 = 30;

pub fn utility_bill<R: Rng + ?Sized>(
    kind: UtilityKind,
    provider: &UtilityProvider,
    year: i16,
    month: i8,
    rng: &mut R,
) -> Result<UtilityBill> {
    provider.validate()?;
    let (bill_date, service_period, usage, charges, total) = match &provider.billing {
        Billing::Metered {
            bill_days,
            amount_range,
            usage_unit,
            usage,
            rate_per_unit,
            base_charge_label,
            base_charge,
            usage_charge_label,
            surcharges,
        } => {
            let bill_day = bill_days.sample(rng, year, month);
            let bill_date = month_date(year, month, bill_day)?;
            let (prev_year, prev_month) = previous_month(year, month);
            let period = StatementPeriod {
                start: month_date(prev_year, prev_month, bill_day)?,
                end: bill_date,
            };

            let (lo, hi) = usage.extra_for(month);
            let quantity = usage.base.saturating_add(rng.random_range(lo..=hi));
            let units = f64::from(quantity);

            let mut charges = vec![
                ChargeLine {
                    label: base_charge_label.clone(),
                    amount: *base_charge,
                },
                ChargeLine {
                    label: usage_charge_label.clone(),
                    amount: round_cents(units * rate_per_unit),
                },
            ];
            charges.extend(surcharges.iter().map(|s| ChargeLine {
                label: s.label.clone(),
                amount: round_cents(units * s.rate_per_unit),
            }));

            let subtotal = round_cents(charges.iter().map(|c| c.amount).sum());
            let usage = Usage {
                quantity,
                unit: usage_unit.clone(),
            };
            (
                bill_date,
                period,
                Some(usage),
                charges,
                amount_range.clamp(subtotal),
            )
        }
        Billing::Flat {
            bill_day,
            amount,
            plan,
        } => {
            let bill_date = month_date(year, month, *bill_day)?;
            let period = StatementPeriod {
                start: bill_date,
                end: add_days(bill_date, FLAT_CYCLE_DAYS)?,
            };
            let charges = vec![ChargeLine {
                label: plan.clone(),
                amount: *amount,
            }];
            (bill_date, period, None, charges, round_cents(*amount))
        }
    };

    Ok(UtilityBill {
        kind,
        year,
        month,
        company: provider.company.clone(),
        account_number: provider.account_number.clone(),
        bill_date,
        due_date: add_days(bill_date, DUE_AFTER_DAYS)?,
        service_period,
        usage,
        charges,
        previous_balance: 0.0,
        total,
    })
}
