//! Request types for the payroll API.
//!
//! This module defines the JSON request body shared by the
//! `/payroll/preview` and `/payroll/process` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::Employee;
use crate::validation::generate_employee_id;

/// Request body for the payroll endpoints.
///
/// `payroll_month` overrides the month from the loaded company settings for
/// this request only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Optional `YYYY-MM` month overriding the configured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payroll_month: Option<String>,
    /// The employee rows to process, in batch order.
    pub employees: Vec<Employee>,
}

impl PayrollRequest {
    /// Fills in `employee_id` for rows that have none, using the row's
    /// position in the batch. Blank IDs count as missing.
    pub fn assign_missing_ids(&mut self) {
        for (index, employee) in self.employees.iter_mut().enumerate() {
            let missing = employee
                .employee_id
                .as_deref()
                .is_none_or(|id| id.trim().is_empty());
            if missing {
                employee.employee_id = Some(generate_employee_id(index));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_deserialize_payroll_request() {
        let json = r#"{
            "payroll_month": "2026-02",
            "employees": [
                {
                    "employee_name": "Kofi Mensah",
                    "tin": "P0012345678",
                    "ssnit_number": "C00123456789",
                    "basic_salary": "5000",
                    "allowances": 500
                }
            ]
        }"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.payroll_month.as_deref(), Some("2026-02"));
        assert_eq!(request.employees.len(), 1);
        assert_eq!(request.employees[0].basic_salary, Some(Decimal::new(5000, 0)));
        assert_eq!(request.employees[0].allowances, Some(Decimal::new(500, 0)));
        assert_eq!(request.employees[0].bonus, None);
    }

    #[test]
    fn test_missing_employees_is_an_error() {
        let result: Result<PayrollRequest, _> = serde_json::from_str(r#"{"payroll_month":"2026-01"}"#);
        let error = result.unwrap_err().to_string();
        assert!(error.contains("missing field `employees`"));
    }

    #[test]
    fn test_assign_missing_ids_keeps_existing() {
        let mut request = PayrollRequest {
            payroll_month: None,
            employees: vec![
                Employee::default(),
                Employee {
                    employee_id: Some("STAFF-9".to_string()),
                    ..Default::default()
                },
                Employee {
                    employee_id: Some("  ".to_string()),
                    ..Default::default()
                },
            ],
        };

        request.assign_missing_ids();

        let ids: Vec<Option<&str>> = request
            .employees
            .iter()
            .map(|e| e.employee_id.as_deref())
            .collect();
        assert_eq!(ids, vec![Some("EMP001"), Some("STAFF-9"), Some("EMP003")]);
    }
}
