//! Sampling primitives for simulated account activity
//!
//! Ranges are inclusive on both ends. Every sampler takes the random source
//! explicitly so a seeded generator reproduces the same activity.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::date_math::days_in_month;
use crate::error::ConfigError;
use crate::money::round_cents;

/// Inclusive currency range sampled uniformly and rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

impl AmountRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.min >= self.max {
            return round_cents(self.min);
        }
        round_cents(rng.random_range(self.min..=self.max))
    }

    /// Clamp `value` into the range
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        require_finite(field, self.min)?;
        require_finite(field, self.max)?;
        if self.min > self.max || self.min < 0.0 {
            return Err(ConfigError::EmptyRange {
                field: field.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Reject NaN and infinities before they reach a sampler
pub fn require_finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

/// Inclusive day-of-month window, clamped to the length of the sampled month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    pub first: i8,
    pub last: i8,
}

impl DayRange {
    #[must_use]
    pub const fn new(first: i8, last: i8) -> Self {
        Self { first, last }
    }

    /// Any day of the month
    #[must_use]
    pub const fn whole_month() -> Self {
        Self { first: 1, last: 31 }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, year: i16, month: i8) -> i8 {
        let month_len = days_in_month(year, month);
        let hi = self.last.min(month_len);
        let lo = self.first.min(hi);
        rng.random_range(lo..=hi)
    }

    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        if self.first < 1 || self.last > 31 || self.first > self.last {
            return Err(ConfigError::InvalidDayRange {
                field: field.to_string(),
                first: self.first,
                last: self.last,
            });
        }
        Ok(())
    }
}

/// Inclusive range of occurrences per month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if self.min >= self.max {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }

    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::EmptyRange {
                field: field.to_string(),
                min: f64::from(self.min),
                max: f64::from(self.max),
            });
        }
        Ok(())
    }
}
