//! Rounding and rate helpers shared by every view.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits every reported figure is rounded to.
pub const REPORT_DECIMAL_PLACES: u32 = 2;

/// Rounds to two decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use workforce_analytics::aggregation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// assert_eq!(round_half_up(dec("2.345")), dec("2.35"));
/// assert_eq!(round_half_up(dec("2.355")), dec("2.36"));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(REPORT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an optional average, treating a missing value as zero.
pub fn rounded_or_zero(value: Option<Decimal>) -> Decimal {
    value.map(round_half_up).unwrap_or(Decimal::ZERO)
}

/// Percentage of `part` over `total`, rounded to two places; zero when `total` is zero.
///
/// # Examples
///
/// ```
/// use workforce_analytics::aggregation::rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(rate(8, 10), Decimal::new(8000, 2));
/// assert_eq!(rate(3, 0), Decimal::ZERO);
/// ```
pub fn rate(part: u64, total: u64) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    round_half_up(Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(total))
}
