//! Employee model and compensation inputs.
//!
//! This module defines the [`Employee`] row supplied by input sources and the
//! defaulted [`CompensationInput`] the calculation engine actually reads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The numeric inputs for one employee in one pay period, with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationInput {
    /// Contractual base pay for the period.
    pub basic_salary: Decimal,
    /// Non-basic additions, not subject to SSNIT.
    pub allowances: Decimal,
    /// Discretionary payment taxed at the flat bonus rate.
    pub bonus: Decimal,
    /// Hours worked beyond the standard schedule.
    pub overtime_hours: Decimal,
}

/// Represents one employee row in a payroll batch.
///
/// Identity and bank fields are opaque to the engine and are carried through
/// to the [`PayrollResult`](super::PayrollResult) unchanged. Compensation
/// fields are optional so that the validator can report a missing basic
/// salary; the engine treats any missing amount as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Full name of the employee.
    #[serde(default)]
    pub employee_name: String,
    /// Employer-assigned identifier (e.g., "EMP001").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// GRA Taxpayer Identification Number (P + 10 digits).
    #[serde(default)]
    pub tin: String,
    /// SSNIT number (C + 11 digits).
    #[serde(default)]
    pub ssnit_number: String,
    /// Monthly basic salary.
    #[serde(default)]
    pub basic_salary: Option<Decimal>,
    /// Monthly allowances.
    #[serde(default)]
    pub allowances: Option<Decimal>,
    /// Bonus paid this period.
    #[serde(default)]
    pub bonus: Option<Decimal>,
    /// Overtime hours worked this period.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
    /// Name of the employee's bank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// Bank account number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Mobile money number (0 + 9 digits).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_money: Option<String>,
}

impl Employee {
    /// Returns the compensation inputs with missing amounts defaulted to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghana_payroll::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     employee_name: "Kwame Asante".to_string(),
    ///     basic_salary: Some(Decimal::new(3500, 0)),
    ///     ..Default::default()
    /// };
    ///
    /// let input = employee.compensation();
    /// assert_eq!(input.basic_salary, Decimal::new(3500, 0));
    /// assert_eq!(input.allowances, Decimal::ZERO);
    /// assert_eq!(input.bonus, Decimal::ZERO);
    /// assert_eq!(input.overtime_hours, Decimal::ZERO);
    /// ```
    pub fn compensation(&self) -> CompensationInput {
        CompensationInput {
            basic_salary: self.basic_salary.unwrap_or_default(),
            allowances: self.allowances.unwrap_or_default(),
            bonus: self.bonus.unwrap_or_default(),
            overtime_hours: self.overtime_hours.unwrap_or_default(),
        }
    }
}
