//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] produced for every employee row
//! and the [`BatchSummary`] aggregated over a whole batch.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Employee;

/// The calculated payroll figures for one employee.
///
/// Every derived amount is rounded to 2 decimal places. The input row is
/// carried in `employee` exactly as it was supplied, and the defaulted
/// compensation amounts the engine used are echoed alongside.
///
/// The following always hold:
/// - `gross_pay = basic_salary + allowances + overtime_pay + bonus`
/// - `taxable_income = gross_pay - ssnit_employee - bonus`
/// - `total_deductions = ssnit_employee + paye + bonus_tax`
/// - `net_pay = gross_pay - total_deductions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// The input row, unchanged.
    pub employee: Employee,
    /// Basic salary used for the calculation.
    pub basic_salary: Decimal,
    /// Allowances used for the calculation (0 when not supplied).
    pub allowances: Decimal,
    /// Bonus used for the calculation (0 when not supplied).
    pub bonus: Decimal,
    /// Overtime hours used for the calculation (0 when not supplied).
    pub overtime_hours: Decimal,
    /// Pay for overtime hours at 1.5x the hourly rate.
    pub overtime_pay: Decimal,
    /// Basic salary plus allowances, overtime pay and bonus.
    pub gross_pay: Decimal,
    /// Employee SSNIT contribution (5.5% of basic salary).
    pub ssnit_employee: Decimal,
    /// Employer SSNIT contribution (13% of basic salary).
    pub ssnit_employer: Decimal,
    /// Income subject to the progressive PAYE schedule.
    pub taxable_income: Decimal,
    /// Progressive income tax.
    pub paye: Decimal,
    /// Flat-rate tax on the bonus.
    pub bonus_tax: Decimal,
    /// SSNIT employee contribution plus PAYE plus bonus tax.
    pub total_deductions: Decimal,
    /// Gross pay less total deductions.
    pub net_pay: Decimal,
}

/// Totals across a batch of [`PayrollResult`]s.
///
/// Each total is the sum of the already-rounded per-employee figures, so
/// adding up the displayed rows reproduces it exactly.
///
/// # Example
///
/// ```
/// use ghana_payroll::models::BatchSummary;
/// use rust_decimal::Decimal;
///
/// let summary = BatchSummary::default();
/// assert_eq!(summary.employee_count, 0);
/// assert_eq!(summary.total_net_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of employees in the batch.
    pub employee_count: usize,
    /// Sum of basic salaries.
    pub total_basic_salary: Decimal,
    /// Sum of allowances.
    pub total_allowances: Decimal,
    /// Sum of bonuses.
    pub total_bonus: Decimal,
    /// Sum of overtime pay.
    pub total_overtime_pay: Decimal,
    /// Sum of gross pay.
    pub total_gross_pay: Decimal,
    /// Sum of employee SSNIT contributions.
    pub total_ssnit_employee: Decimal,
    /// Sum of employer SSNIT contributions.
    pub total_ssnit_employer: Decimal,
    /// Employee plus employer SSNIT totals.
    pub total_ssnit: Decimal,
    /// Sum of PAYE.
    pub total_paye: Decimal,
    /// Sum of bonus tax.
    pub total_bonus_tax: Decimal,
    /// Sum of total deductions.
    pub total_deductions: Decimal,
    /// Sum of net pay.
    pub total_net_pay: Decimal,
}
