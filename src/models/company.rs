//! Company settings model.
//!
//! This module contains the [`CompanySettings`] that identify the employer and
//! the payroll month a batch belongs to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::PAYROLL_MONTH_REGEX;

/// The employer running the payroll and the month being processed.
///
/// # Example
///
/// ```
/// use ghana_payroll::models::CompanySettings;
/// use chrono::NaiveDate;
///
/// let settings = CompanySettings {
///     company_name: "Accra Textiles Ltd".to_string(),
///     company_tin: "P0001112223".to_string(),
///     company_ssnit: "C00011122233".to_string(),
///     company_address: None,
///     payroll_month: "2026-01".to_string(),
/// };
///
/// assert_eq!(
///     settings.period_start(),
///     Some(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySettings {
    /// Registered company name.
    #[serde(default)]
    pub company_name: String,
    /// Company TIN (P + 10 digits).
    #[serde(default)]
    pub company_tin: String,
    /// SSNIT employer number (C + 11 digits).
    #[serde(default)]
    pub company_ssnit: String,
    /// Postal or physical address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_address: Option<String>,
    /// The month being processed, in `YYYY-MM` format.
    #[serde(default)]
    pub payroll_month: String,
}

impl CompanySettings {
    /// Returns the first day of the payroll month.
    ///
    /// Returns `None` if `payroll_month` is not a `YYYY-MM` string naming a
    /// real month.
    pub fn period_start(&self) -> Option<NaiveDate> {
        parse_payroll_month(&self.payroll_month)
    }
}

/// Parses a `YYYY-MM` payroll month into the first day of that month.
pub fn parse_payroll_month(month: &str) -> Option<NaiveDate> {
    if !PAYROLL_MONTH_REGEX.is_match(month) {
        return None;
    }

    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").ok()
}
