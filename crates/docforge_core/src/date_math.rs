//! Calendar helpers for monthly documents.
//!
//! Statements and bills address days by (year, month, day) and frequently ask
//! for "the 31st" in a 30-day month. The helpers here clamp such days to the
//! month end instead of failing, and keep day arithmetic on `jiff::civil::Date`.

use jiff::ToSpan;
use jiff::civil::Date;

/// Fast leap year check.
#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Days in `month` (1-12) of `year`.
#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month.clamp(1, 12) - 1) as usize]
    }
}

/// Clamp a day-of-month into `1..=days_in_month(year, month)`.
#[inline]
pub fn clamp_day(year: i16, month: i8, day: i8) -> i8 {
    day.clamp(1, days_in_month(year, month))
}

/// Build a date, clamping `day` to the end of the month.
pub fn month_date(year: i16, month: i8, day: i8) -> Result<Date, jiff::Error> {
    Date::new(year, month, clamp_day(year, month, day))
}

/// First day of the month.
pub fn month_start(year: i16, month: i8) -> Result<Date, jiff::Error> {
    Date::new(year, month, 1)
}

/// Last day of the month.
pub fn month_end(year: i16, month: i8) -> Result<Date, jiff::Error> {
    Date::new(year, month, days_in_month(year, month))
}

/// The (year, month) preceding the given one, rolling over January.
#[inline]
pub fn previous_month(year: i16, month: i8) -> (i16, i8) {
    if month > 1 {
        (year, month - 1)
    } else {
        (year - 1, 12)
    }
}

/// Add `n` days to a date.
pub fn add_days(d: Date, n: i32) -> Result<Date, jiff::Error> {
    d.checked_add(n.days())
}

/// English month name ("January").
pub fn month_name(month: i8) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES[(month.clamp(1, 12) - 1) as usize]
}
