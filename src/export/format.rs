//! Number formatting for the text export.
//!
//! Every figure renders with exactly two decimals after half-up rounding;
//! currency adds a symbol and thousands separators, percentages a trailing `%`.

use rust_decimal::Decimal;

use crate::aggregation::{REPORT_DECIMAL_PLACES, round_half_up};

/// Renders `value` with exactly two decimals.
///
/// # Examples
///
/// ```
/// use workforce_analytics::export::format_fixed;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_fixed(Decimal::new(35, 1)), "3.50");
/// assert_eq!(format_fixed(Decimal::new(82500, 0)), "82500.00");
/// ```
pub fn format_fixed(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(REPORT_DECIMAL_PLACES);
    rounded.to_string()
}

/// Renders a currency amount: symbol, thousands separators, two decimals.
///
/// Negative amounts put the sign before the symbol.
///
/// # Examples
///
/// ```
/// use workforce_analytics::export::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(123450, 2), "$"), "$1,234.50");
/// assert_eq!(format_currency(Decimal::new(-5, 0), "$"), "-$5.00");
/// ```
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let amount = add_thousands_separator(&format_fixed(value.abs()));
    if value.is_sign_negative() && !value.is_zero() {
        format!("-{}{}", symbol, amount)
    } else {
        format!("{}{}", symbol, amount)
    }
}

/// Renders a percentage with two decimals and a trailing `%`.
///
/// The value is already a percentage (80 renders as `80.00%`).
pub fn format_percentage(value: Decimal) -> String {
    format!("{}%", format_fixed(value))
}

/// Add thousands separators to the integer part of a numeric string.
fn add_thousands_separator(s: &str) -> String {
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (s, None),
    };

    let negative = integer_part.starts_with('-');
    let digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::with_capacity(s.len() + digits.len() / 3 + 1);
    if negative {
        result.push('-');
    }

    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if let Some(decimal) = decimal_part {
        result.push('.');
        result.push_str(decimal);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_fixed_pads_and_rounds() {
        assert_eq!(format_fixed(dec("4")), "4.00");
        assert_eq!(format_fixed(dec("3.375")), "3.38");
        assert_eq!(format_fixed(dec("0")), "0.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec("82500"), "$"), "$82,500.00");
        assert_eq!(format_currency(dec("999.999"), "$"), "$1,000.00");
        assert_eq!(format_currency(dec("1234567.8"), "$"), "$1,234,567.80");
        assert_eq!(format_currency(dec("12.5"), "€"), "€12.50");
        assert_eq!(format_currency(Decimal::ZERO, "$"), "$0.00");
    }

    #[test]
    fn test_format_negative_currency() {
        assert_eq!(format_currency(dec("-1234.5"), "$"), "-$1,234.50");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(dec("80")), "80.00%");
        assert_eq!(format_percentage(dec("66.666")), "66.67%");
        assert_eq!(format_percentage(Decimal::ZERO), "0.00%");
    }

    #[test]
    fn test_add_thousands_separator() {
        assert_eq!(add_thousands_separator("100.00"), "100.00");
        assert_eq!(add_thousands_separator("1000"), "1,000");
        assert_eq!(add_thousands_separator("123456789.12"), "123,456,789.12");
        assert_eq!(add_thousands_separator("-1000.5"), "-1,000.5");
    }
}
