//! Currency rounding, guarded percentages and display formatting.

/// Round to whole cents.
#[inline]
pub fn round_cents(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round to `places` decimal places.
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Convert a cent-rounded amount to integer cents.
#[inline]
pub fn to_cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Convert integer cents back to a currency amount.
#[inline]
pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Percentage change from `from` to `to`.
///
/// A zero starting value has no meaningful base, so the change is reported as 0%.
pub fn percent_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        return 0.0;
    }
    (to - from) / from * 100.0
}

/// `part` as a percentage of `whole`, or 0% when `whole` is zero.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    part / whole * 100.0
}

fn group_thousands(dollars: i64) -> String {
    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value as `$1,234.56` or `-$1,234.56`
pub fn format_currency(value: f64) -> String {
    let total_cents = to_cents(value.abs());
    let dollars = group_thousands(total_cents / 100);
    let cents = total_cents % 100;

    if value < 0.0 && total_cents > 0 {
        format!("-${dollars}.{cents:02}")
    } else {
        format!("${dollars}.{cents:02}")
    }
}

/// Format a fraction (0.22) as a percentage (22.00%)
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(1.234), 1.23);
        assert_eq!(round_cents(1.235_1), 1.24);
        assert_eq!(round_cents(-50.004), -50.0);
    }

    #[test]
    fn test_round_to_three_places() {
        assert_eq!(round_to(12.345_67, 3), 12.346);
    }

    #[test]
    fn test_cents_conversion() {
        assert_eq!(to_cents(700.0), 70_000);
        assert_eq!(to_cents(0.1 + 0.2), 30);
        assert_eq!(from_cents(12_345), 123.45);
    }

    #[test]
    fn test_percent_change_zero_base() {
        assert_eq!(percent_change(0.0, 500.0), 0.0);
    }

    #[test]
    fn test_percent_change() {
        let change = percent_change(200.0, 250.0);
        assert!((change - 25.0).abs() < 1e-9, "Expected 25, got {change}");
        let drop = percent_change(200.0, 150.0);
        assert!((drop + 25.0).abs() < 1e-9, "Expected -25, got {drop}");
    }

    #[test]
    fn test_percent_of_zero_whole() {
        assert_eq!(percent_of(10.0, 0.0), 0.0);
        assert!((percent_of(25.0, 200.0) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-2215.27), "-$2,215.27");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.22), "22.00%");
    }
}
