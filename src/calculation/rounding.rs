//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `decimals` fractional digits, half away from zero.
///
/// Midpoints round up in magnitude on both sides of zero, so 5.125 becomes
/// 5.13 and -5.125 becomes -5.13.
///
/// # Examples
///
/// ```
/// use ghana_payroll::calculation::round;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("5.126").unwrap();
/// assert_eq!(round(value, 2), Decimal::from_str("5.13").unwrap());
/// assert_eq!(round(-value, 2), Decimal::from_str("-5.13").unwrap());
/// ```
pub fn round(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a monetary amount to 2 decimal places.
pub fn round_money(value: Decimal) -> Decimal {
    round(value, 2)
}
