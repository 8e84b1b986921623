//! SSNIT social security contribution calculation.
//!
//! Contributions are computed on basic salary only. Allowances, bonus and
//! overtime pay never form part of the contribution base.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rates::{SSNIT_EMPLOYEE_RATE, SSNIT_EMPLOYER_RATE};
use super::rounding::round_money;

/// The employee/employer split of an SSNIT contribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsnitContribution {
    /// Deducted from the employee's pay (5.5%).
    pub employee: Decimal,
    /// Paid by the employer on top of gross pay (13%).
    pub employer: Decimal,
    /// `employee + employer`.
    pub total: Decimal,
}

/// Calculates SSNIT contributions on a basic salary.
///
/// Each side is rounded to 2 decimal places on its own and `total` is the sum
/// of the two rounded sides, so the three figures always reconcile exactly. A
/// basic salary of zero or less yields all-zero contributions.
///
/// # Examples
///
/// ```
/// use ghana_payroll::calculation::calculate_ssnit;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ssnit = calculate_ssnit(Decimal::from_str("5000").unwrap());
/// assert_eq!(ssnit.employee, Decimal::from_str("275.00").unwrap());
/// assert_eq!(ssnit.employer, Decimal::from_str("650.00").unwrap());
/// assert_eq!(ssnit.total, Decimal::from_str("925.00").unwrap());
/// ```
pub fn calculate_ssnit(basic_salary: Decimal) -> SsnitContribution {
    if basic_salary <= Decimal::ZERO {
        return SsnitContribution::default();
    }

    let employee = round_money(basic_salary * SSNIT_EMPLOYEE_RATE);
    let employer = round_money(basic_salary * SSNIT_EMPLOYER_RATE);

    SsnitContribution {
        employee,
        employer,
        total: round_money(employee.saturating_add(employer)),
    }
}
