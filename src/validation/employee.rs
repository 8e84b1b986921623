//! Employee row validation.
//!
//! Checks required fields, identifier formats and amount ranges for each row,
//! and reports every problem found rather than stopping at the first.

use rust_decimal::Decimal;

use crate::models::Employee;

use super::duplicates::{check_duplicate_ssnit, check_duplicate_tins};
use super::formats::{validate_phone, validate_ssnit, validate_tin};
use super::issue::ValidationIssue;

/// Largest monthly amount accepted for basic salary, allowances or bonus.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Largest number of overtime hours accepted for a month (31 days × 24 hours).
pub const MAX_OVERTIME_HOURS: Decimal = Decimal::from_parts(744, 0, 0, false, 0);

/// Validates a single employee row.
///
/// ## Rules
/// - `employee_name` is required
/// - `tin` is required and must be `P` + 10 digits
/// - `ssnit_number` is required and must be `C` + 11 digits
/// - `basic_salary` is required, must be positive and at most [`MAX_AMOUNT`]
/// - `allowances`, when given, must not be negative or exceed [`MAX_AMOUNT`]
/// - `bonus`, when given, must not exceed [`MAX_AMOUNT`]
/// - `overtime_hours`, when given, must not exceed [`MAX_OVERTIME_HOURS`]
/// - `mobile_money`, when given, must be `0` + 9 digits
///
/// ## Example
/// ```
/// use ghana_payroll::models::Employee;
/// use ghana_payroll::validation::validate_employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     employee_name: "Kofi Mensah".to_string(),
///     tin: "P0012345678".to_string(),
///     ssnit_number: "C00123456789".to_string(),
///     basic_salary: Some(Decimal::new(5000, 0)),
///     ..Default::default()
/// };
/// assert!(validate_employee(&employee, 1).is_empty());
/// ```
pub fn validate_employee(employee: &Employee, row: usize) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if employee.employee_name.trim().is_empty() {
        issues.push(ValidationIssue::new(
            row,
            "employee_name",
            "Employee name is required",
        ));
    }

    if employee.tin.is_empty() {
        issues.push(ValidationIssue::new(row, "tin", "TIN is required"));
    } else if !validate_tin(&employee.tin) {
        issues.push(ValidationIssue::new(
            row,
            "tin",
            "Invalid TIN format (must be P followed by 10 digits)",
        ));
    }

    if employee.ssnit_number.is_empty() {
        issues.push(ValidationIssue::new(
            row,
            "ssnit_number",
            "SSNIT number is required",
        ));
    } else if !validate_ssnit(&employee.ssnit_number) {
        issues.push(ValidationIssue::new(
            row,
            "ssnit_number",
            "Invalid SSNIT number (must be C followed by 11 digits)",
        ));
    }

    match employee.basic_salary {
        None => issues.push(ValidationIssue::new(
            row,
            "basic_salary",
            "Basic salary is required",
        )),
        Some(salary) if salary <= Decimal::ZERO => issues.push(ValidationIssue::new(
            row,
            "basic_salary",
            "Basic salary must be a positive number",
        )),
        Some(salary) if salary > MAX_AMOUNT => issues.push(ValidationIssue::new(
            row,
            "basic_salary",
            format!("Basic salary exceeds the maximum of {}", MAX_AMOUNT),
        )),
        Some(_) => {}
    }

    match employee.allowances {
        Some(allowances) if allowances < Decimal::ZERO => issues.push(ValidationIssue::new(
            row,
            "allowances",
            "Allowances cannot be negative",
        )),
        Some(allowances) if allowances > MAX_AMOUNT => issues.push(ValidationIssue::new(
            row,
            "allowances",
            format!("Allowances exceed the maximum of {}", MAX_AMOUNT),
        )),
        _ => {}
    }

    if employee.bonus.is_some_and(|bonus| bonus > MAX_AMOUNT) {
        issues.push(ValidationIssue::new(
            row,
            "bonus",
            format!("Bonus exceeds the maximum of {}", MAX_AMOUNT),
        ));
    }

    if employee
        .overtime_hours
        .is_some_and(|hours| hours > MAX_OVERTIME_HOURS)
    {
        issues.push(ValidationIssue::new(
            row,
            "overtime_hours",
            format!("Overtime hours exceed the maximum of {}", MAX_OVERTIME_HOURS),
        ));
    }

    if employee
        .mobile_money
        .as_deref()
        .is_some_and(|phone| !validate_phone(phone))
    {
        issues.push(ValidationIssue::new(
            row,
            "mobile_money",
            "Invalid phone number format (must be 10 digits starting with 0)",
        ));
    }

    issues
}

/// Validates every row of a batch. Rows are numbered from 1.
pub fn validate_employees(employees: &[Employee]) -> Vec<ValidationIssue> {
    employees
        .iter()
        .enumerate()
        .flat_map(|(index, employee)| validate_employee(employee, index + 1))
        .collect()
}

/// Runs every batch check: per-row validation, then duplicate TINs, then
/// duplicate SSNIT numbers.
///
/// A batch may be processed for real only when this returns no issues.
pub fn validate_batch(employees: &[Employee]) -> Vec<ValidationIssue> {
    let mut issues = validate_employees(employees);
    issues.extend(check_duplicate_tins(employees));
    issues.extend(check_duplicate_ssnit(employees));
    issues
}

/// Generates an employee ID from a 0-based batch index.
///
/// ## Example
/// ```
/// use ghana_payroll::validation::generate_employee_id;
///
/// assert_eq!(generate_employee_id(0), "EMP001");
/// assert_eq!(generate_employee_id(99), "EMP100");
/// ```
pub fn generate_employee_id(index: usize) -> String {
    format!("EMP{:03}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn valid_employee() -> Employee {
        Employee {
            employee_name: "Kofi Mensah".to_string(),
            employee_id: Some("EMP001".to_string()),
            tin: "P0012345678".to_string(),
            ssnit_number: "C00123456789".to_string(),
            basic_salary: Some(dec("5000")),
            allowances: Some(dec("500")),
            ..Default::default()
        }
    }

    fn fields(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.field.as_str()).collect()
    }

    #[test]
    fn test_valid_employee_has_no_issues() {
        assert!(validate_employee(&valid_employee(), 1).is_empty());
    }

    #[test]
    fn test_missing_name() {
        let mut employee = valid_employee();
        employee.employee_name = "   ".to_string();

        let issues = validate_employee(&employee, 4);
        assert_eq!(
            issues,
            vec![ValidationIssue::new(4, "employee_name", "Employee name is required")]
        );
    }

    #[test]
    fn test_missing_tin_reports_required_not_format() {
        let mut employee = valid_employee();
        employee.tin = String::new();

        let issues = validate_employee(&employee, 1);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "TIN is required");
    }

    #[test]
    fn test_invalid_tin_format() {
        let mut employee = valid_employee();
        employee.tin = "P001234567".to_string();

        let issues = validate_employee(&employee, 1);
        assert_eq!(
            issues[0].message,
            "Invalid TIN format (must be P followed by 10 digits)"
        );
    }

    #[test]
    fn test_invalid_ssnit_format() {
        let mut employee = valid_employee();
        employee.ssnit_number = "00123456789".to_string();

        let issues = validate_employee(&employee, 2);
        assert_eq!(fields(&issues), vec!["ssnit_number"]);
        assert_eq!(issues[0].row, 2);
        assert!(issues[0].message.contains("C followed by 11 digits"));
    }

    #[test]
    fn test_missing_basic_salary() {
        let mut employee = valid_employee();
        employee.basic_salary = None;

        let issues = validate_employee(&employee, 1);
        assert_eq!(issues[0].message, "Basic salary is required");
    }

    #[test]
    fn test_non_positive_basic_salary() {
        for salary in ["0", "-100"] {
            let mut employee = valid_employee();
            employee.basic_salary = Some(dec(salary));

            let issues = validate_employee(&employee, 1);
            assert_eq!(fields(&issues), vec!["basic_salary"]);
            assert_eq!(issues[0].message, "Basic salary must be a positive number");
        }
    }

    #[test]
    fn test_negative_allowances() {
        let mut employee = valid_employee();
        employee.allowances = Some(dec("-1"));

        let issues = validate_employee(&employee, 1);
        assert_eq!(issues[0].message, "Allowances cannot be negative");
    }

    #[test]
    fn test_zero_and_missing_allowances_are_fine() {
        let mut employee = valid_employee();
        employee.allowances = Some(Decimal::ZERO);
        assert!(validate_employee(&employee, 1).is_empty());

        employee.allowances = None;
        assert!(validate_employee(&employee, 1).is_empty());
    }

    #[test]
    fn test_amounts_above_maximum() {
        let mut employee = valid_employee();
        employee.basic_salary = Some(Decimal::MAX);
        employee.allowances = Some(dec("1000000000.01"));
        employee.bonus = Some(Decimal::MAX);
        employee.overtime_hours = Some(dec("745"));

        let issues = validate_employee(&employee, 3);
        assert_eq!(
            fields(&issues),
            vec!["basic_salary", "allowances", "bonus", "overtime_hours"]
        );
        assert_eq!(
            issues[0].message,
            "Basic salary exceeds the maximum of 1000000000"
        );
        assert_eq!(
            issues[3].message,
            "Overtime hours exceed the maximum of 744"
        );
    }

    #[test]
    fn test_amounts_at_maximum_are_fine() {
        let mut employee = valid_employee();
        employee.basic_salary = Some(MAX_AMOUNT);
        employee.allowances = Some(MAX_AMOUNT);
        employee.bonus = Some(MAX_AMOUNT);
        employee.overtime_hours = Some(MAX_OVERTIME_HOURS);

        assert!(validate_employee(&employee, 1).is_empty());
    }

    #[test]
    fn test_mobile_money_format() {
        let mut employee = valid_employee();
        employee.mobile_money = Some("0241234567".to_string());
        assert!(validate_employee(&employee, 1).is_empty());

        employee.mobile_money = Some(String::new());
        assert!(validate_employee(&employee, 1).is_empty());

        employee.mobile_money = Some("12345".to_string());
        assert_eq!(fields(&validate_employee(&employee, 1)), vec!["mobile_money"]);
    }

    #[test]
    fn test_all_problems_reported_together() {
        let issues = validate_employee(&Employee::default(), 7);
        assert_eq!(
            fields(&issues),
            vec!["employee_name", "tin", "ssnit_number", "basic_salary"]
        );
        assert!(issues.iter().all(|i| i.row == 7));
    }

    #[test]
    fn test_validate_employees_numbers_rows_from_one() {
        let mut second = valid_employee();
        second.tin = "bad".to_string();

        let issues = validate_employees(&[valid_employee(), second]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].row, 2);
    }

    #[test]
    fn test_validate_batch_includes_duplicates() {
        let mut second = valid_employee();
        second.employee_name = "Ama Owusu".to_string();
        second.ssnit_number = "C00987654321".to_string();

        let issues = validate_batch(&[valid_employee(), second]);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.field == "tin"));
    }

    #[test]
    fn test_validate_batch_clean() {
        let mut second = valid_employee();
        second.tin = "P0098765432".to_string();
        second.ssnit_number = "C00987654321".to_string();

        assert!(validate_batch(&[valid_employee(), second]).is_empty());
    }

    #[test]
    fn test_generate_employee_id() {
        assert_eq!(generate_employee_id(0), "EMP001");
        assert_eq!(generate_employee_id(9), "EMP010");
        assert_eq!(generate_employee_id(99), "EMP100");
        assert_eq!(generate_employee_id(999), "EMP1000");
    }
}
