//! Per-employee payroll processing.
//!
//! This module chains the individual rules into the full monthly pipeline:
//! overtime, gross pay, SSNIT, taxable income, PAYE, bonus tax, deductions
//! and net pay.

use crate::models::{Employee, PayrollResult};

use super::bonus_tax::calculate_bonus_tax;
use super::overtime::calculate_overtime_pay;
use super::paye::calculate_paye;
use super::rounding::round_money;
use super::ssnit::calculate_ssnit;

/// Calculates the full payroll result for one employee.
///
/// The steps run in a fixed order because later steps consume the rounded
/// outputs of earlier ones:
///
/// 1. Overtime pay = overtime hours × (basic / 176) × 1.5
/// 2. Gross pay = basic + allowances + overtime pay + bonus
/// 3. SSNIT on basic salary only
/// 4. Taxable income = gross pay − SSNIT employee − bonus
/// 5. PAYE on taxable income
/// 6. Bonus tax = 5% of bonus
/// 7. Total deductions = SSNIT employee + PAYE + bonus tax
/// 8. Net pay = gross pay − total deductions
///
/// Missing allowances, bonus and overtime hours count as zero. Any numeric
/// input, including zero or negative amounts, produces a defined result;
/// rejecting bad rows is the job of [`crate::validation`].
///
/// # Examples
///
/// ```
/// use ghana_payroll::calculation::process_employee;
/// use ghana_payroll::models::Employee;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     employee_name: "Kofi Mensah".to_string(),
///     tin: "P0012345678".to_string(),
///     ssnit_number: "C00123456789".to_string(),
///     basic_salary: Some(Decimal::from_str("5000").unwrap()),
///     allowances: Some(Decimal::from_str("500").unwrap()),
///     ..Default::default()
/// };
///
/// let result = process_employee(&employee);
/// assert_eq!(result.gross_pay, Decimal::from_str("5500.00").unwrap());
/// assert_eq!(result.taxable_income, Decimal::from_str("5225.00").unwrap());
/// assert_eq!(result.paye, Decimal::from_str("904.75").unwrap());
/// assert_eq!(result.net_pay, Decimal::from_str("4320.25").unwrap());
/// ```
pub fn process_employee(employee: &Employee) -> PayrollResult {
    let input = employee.compensation();

    let overtime_pay = calculate_overtime_pay(input.basic_salary, input.overtime_hours);
    let gross_pay = input
        .basic_salary
        .saturating_add(input.allowances)
        .saturating_add(overtime_pay)
        .saturating_add(input.bonus);

    let ssnit = calculate_ssnit(input.basic_salary);

    // Bonus leaves the progressive base; it is taxed at the flat rate instead.
    let taxable_income = gross_pay
        .saturating_sub(ssnit.employee)
        .saturating_sub(input.bonus);
    let paye = calculate_paye(taxable_income);
    let bonus_tax = calculate_bonus_tax(input.bonus);

    let total_deductions = ssnit.employee.saturating_add(paye).saturating_add(bonus_tax);
    let net_pay = gross_pay.saturating_sub(total_deductions);

    PayrollResult {
        employee: employee.clone(),
        basic_salary: input.basic_salary,
        allowances: input.allowances,
        bonus: input.bonus,
        overtime_hours: input.overtime_hours,
        overtime_pay: round_money(overtime_pay),
        gross_pay: round_money(gross_pay),
        ssnit_employee: round_money(ssnit.employee),
        ssnit_employer: round_money(ssnit.employer),
        taxable_income: round_money(taxable_income),
        paye: round_money(paye),
        bonus_tax: round_money(bonus_tax),
        total_deductions: round_money(total_deductions),
        net_pay: round_money(net_pay),
    }
}

/// Calculates payroll results for a batch of employees.
///
/// The output has one result per input, in the same order.
pub fn process_employees(employees: &[Employee]) -> Vec<PayrollResult> {
    employees.iter().map(process_employee).collect()
}

/// Returns true if a result satisfies the payroll identities.
///
/// Checks gross pay, taxable income, total deductions and net pay against the
/// other fields of the same result.
pub fn is_consistent(result: &PayrollResult) -> bool {
    let gross = result
        .basic_salary
        .saturating_add(result.allowances)
        .saturating_add(result.overtime_pay)
        .saturating_add(result.bonus);
    let taxable = gross
        .saturating_sub(result.ssnit_employee)
        .saturating_sub(result.bonus);
    let deductions = result
        .ssnit_employee
        .saturating_add(result.paye)
        .saturating_add(result.bonus_tax);

    result.gross_pay == round_money(gross)
        && result.taxable_income == round_money(taxable)
        && result.total_deductions == deductions
        && result.net_pay == round_money(gross.saturating_sub(deductions))
}
