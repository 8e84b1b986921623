//! Overtime pay calculation.
//!
//! The hourly rate is derived from monthly basic salary over the standard
//! 176-hour month, and overtime hours are paid at 1.5 times that rate.

use rust_decimal::Decimal;

use super::rates::{OVERTIME_MULTIPLIER, STANDARD_MONTHLY_HOURS};
use super::rounding::round_money;

/// Returns the unrounded hourly rate for a monthly basic salary.
pub fn hourly_rate(basic_salary: Decimal) -> Decimal {
    basic_salary / STANDARD_MONTHLY_HOURS
}

/// Calculates overtime pay for the period.
///
/// Computed as `overtime_hours × (basic_salary / 176) × 1.5`. The hourly rate
/// is not rounded on its own; only the final amount is rounded to 2 decimal
/// places. Returns zero if either input is zero or less, and saturates at
/// [`Decimal::MAX`] instead of overflowing.
///
/// # Examples
///
/// ```
/// use ghana_payroll::calculation::calculate_overtime_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 5000 / 176 = 28.409..., 10 × 28.409... × 1.5 = 426.136...
/// let pay = calculate_overtime_pay(
///     Decimal::from_str("5000").unwrap(),
///     Decimal::from_str("10").unwrap(),
/// );
/// assert_eq!(pay, Decimal::from_str("426.14").unwrap());
/// ```
pub fn calculate_overtime_pay(basic_salary: Decimal, overtime_hours: Decimal) -> Decimal {
    if basic_salary <= Decimal::ZERO || overtime_hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    round_money(
        overtime_hours
            .saturating_mul(hourly_rate(basic_salary))
            .saturating_mul(OVERTIME_MULTIPLIER),
    )
}
