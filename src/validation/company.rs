//! Company settings validation.

use crate::models::{CompanySettings, parse_payroll_month};

use super::formats::{validate_ssnit, validate_tin};
use super::issue::ValidationIssue;

/// Row number used for issues that belong to company settings.
pub const COMPANY_ROW: usize = 0;

/// Validates a `YYYY-MM` payroll month on its own.
pub fn validate_payroll_month(month: &str) -> Option<ValidationIssue> {
    if month.is_empty() {
        return Some(ValidationIssue::new(
            COMPANY_ROW,
            "payroll_month",
            "Payroll month is required",
        ));
    }
    if parse_payroll_month(month).is_none() {
        return Some(ValidationIssue::new(
            COMPANY_ROW,
            "payroll_month",
            "Payroll month must be in YYYY-MM format",
        ));
    }
    None
}

/// Validates company settings.
///
/// ## Rules
/// - `company_name` is required
/// - `company_tin` is required and must be `P` + 10 digits
/// - `company_ssnit` is required and must be `C` + 11 digits
/// - `payroll_month` is required and must be a real `YYYY-MM` month
///
/// All issues use row 0.
pub fn validate_company_settings(settings: &CompanySettings) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if settings.company_name.trim().is_empty() {
        issues.push(ValidationIssue::new(
            COMPANY_ROW,
            "company_name",
            "Company name is required",
        ));
    }

    if settings.company_tin.is_empty() {
        issues.push(ValidationIssue::new(
            COMPANY_ROW,
            "company_tin",
            "Company TIN is required",
        ));
    } else if !validate_tin(&settings.company_tin) {
        issues.push(ValidationIssue::new(
            COMPANY_ROW,
            "company_tin",
            "Invalid company TIN format",
        ));
    }

    if settings.company_ssnit.is_empty() {
        issues.push(ValidationIssue::new(
            COMPANY_ROW,
            "company_ssnit",
            "Company SSNIT employer number is required",
        ));
    } else if !validate_ssnit(&settings.company_ssnit) {
        issues.push(ValidationIssue::new(
            COMPANY_ROW,
            "company_ssnit",
            "Invalid SSNIT employer number format",
        ));
    }

    issues.extend(validate_payroll_month(&settings.payroll_month));

    issues
}
