//! Batch summary aggregation.

use crate::models::{BatchSummary, PayrollResult};

use super::rounding::round_money;

/// Sums every monetary field across a batch of payroll results.
///
/// The totals are built from the already-rounded per-employee figures in a
/// single pass and each is rounded once at the end. `total_ssnit` is the
/// rounded sum of the employee and employer totals. An empty batch yields an
/// all-zero summary. Totals saturate at [`Decimal::MAX`](rust_decimal::Decimal::MAX)
/// instead of overflowing.
///
/// # Examples
///
/// ```
/// use ghana_payroll::calculation::{calculate_summary_totals, process_employees};
/// use ghana_payroll::models::Employee;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employees = vec![
///     Employee {
///         basic_salary: Some(Decimal::from_str("5000").unwrap()),
///         allowances: Some(Decimal::from_str("500").unwrap()),
///         ..Default::default()
///     },
///     Employee {
///         basic_salary: Some(Decimal::from_str("400").unwrap()),
///         ..Default::default()
///     },
/// ];
///
/// let summary = calculate_summary_totals(&process_employees(&employees));
/// assert_eq!(summary.employee_count, 2);
/// assert_eq!(summary.total_net_pay, Decimal::from_str("4698.25").unwrap());
/// ```
pub fn calculate_summary_totals(results: &[PayrollResult]) -> BatchSummary {
    let totals = results
        .iter()
        .fold(BatchSummary::default(), |mut acc, result| {
            acc.employee_count += 1;
            acc.total_basic_salary = acc.total_basic_salary.saturating_add(result.basic_salary);
            acc.total_allowances = acc.total_allowances.saturating_add(result.allowances);
            acc.total_bonus = acc.total_bonus.saturating_add(result.bonus);
            acc.total_overtime_pay = acc.total_overtime_pay.saturating_add(result.overtime_pay);
            acc.total_gross_pay = acc.total_gross_pay.saturating_add(result.gross_pay);
            acc.total_ssnit_employee = acc
                .total_ssnit_employee
                .saturating_add(result.ssnit_employee);
            acc.total_ssnit_employer = acc
                .total_ssnit_employer
                .saturating_add(result.ssnit_employer);
            acc.total_paye = acc.total_paye.saturating_add(result.paye);
            acc.total_bonus_tax = acc.total_bonus_tax.saturating_add(result.bonus_tax);
            acc.total_deductions = acc.total_deductions.saturating_add(result.total_deductions);
            acc.total_net_pay = acc.total_net_pay.saturating_add(result.net_pay);
            acc
        });

    BatchSummary {
        employee_count: totals.employee_count,
        total_basic_salary: round_money(totals.total_basic_salary),
        total_allowances: round_money(totals.total_allowances),
        total_bonus: round_money(totals.total_bonus),
        total_overtime_pay: round_money(totals.total_overtime_pay),
        total_gross_pay: round_money(totals.total_gross_pay),
        total_ssnit_employee: round_money(totals.total_ssnit_employee),
        total_ssnit_employer: round_money(totals.total_ssnit_employer),
        total_ssnit: round_money(
            totals
                .total_ssnit_employee
                .saturating_add(totals.total_ssnit_employer),
        ),
        total_paye: round_money(totals.total_paye),
        total_bonus_tax: round_money(totals.total_bonus_tax),
        total_deductions: round_money(totals.total_deductions),
        total_net_pay: round_money(totals.total_net_pay),
    }
}
