//! Flat-rate bonus tax.
//!
//! Bonuses are taxed at a single flat rate and never enter the progressive
//! PAYE schedule.

use rust_decimal::Decimal;

use super::rates::BONUS_TAX_RATE;
use super::rounding::round_money;

/// Calculates the 5% flat tax on a bonus.
///
/// Returns zero for a bonus of zero or less.
///
/// # Examples
///
/// ```
/// use ghana_payroll::calculation::calculate_bonus_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tax = calculate_bonus_tax(Decimal::from_str("1000").unwrap());
/// assert_eq!(tax, Decimal::from_str("50.00").unwrap());
/// ```
pub fn calculate_bonus_tax(bonus: Decimal) -> Decimal {
    if bonus <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_money(bonus * BONUS_TAX_RATE)
}
