//! Identifier and period format checks.
//!
//! Ghana payroll identifiers are a fixed prefix letter followed by a fixed
//! number of ASCII digits. Surrounding whitespace is ignored.

use std::sync::LazyLock;

use regex::Regex;

/// A TIN: `P` followed by 10 digits.
pub static TIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^P[0-9]{10}$").expect("valid TIN pattern"));

/// An SSNIT number: `C` followed by 11 digits.
pub static SSNIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^C[0-9]{11}$").expect("valid SSNIT pattern"));

/// A local phone number: `0` followed by 9 digits.
pub static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[0-9]{9}$").expect("valid phone pattern"));

/// A payroll month in `YYYY-MM` form. The month range is checked separately.
pub static PAYROLL_MONTH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}$").expect("valid payroll month pattern"));

/// Validates a TIN (Taxpayer Identification Number): `P` followed by 10 digits.
///
/// # Example
/// ```
/// use ghana_payroll::validation::validate_tin;
///
/// assert!(validate_tin("P0012345678"));
/// assert!(!validate_tin("P001234567"));
/// assert!(!validate_tin("0012345678"));
/// ```
pub fn validate_tin(tin: &str) -> bool {
    TIN_REGEX.is_match(tin.trim())
}

/// Validates an SSNIT number: `C` followed by 11 digits.
///
/// # Example
/// ```
/// use ghana_payroll::validation::validate_ssnit;
///
/// assert!(validate_ssnit("C00123456789"));
/// assert!(!validate_ssnit("C0012345678"));
/// ```
pub fn validate_ssnit(ssnit_number: &str) -> bool {
    SSNIT_REGEX.is_match(ssnit_number.trim())
}

/// Validates a Ghana phone number: `0` followed by 9 digits.
///
/// The phone number is optional, so an empty or blank value is valid.
pub fn validate_phone(phone: &str) -> bool {
    let phone = phone.trim();
    phone.is_empty() || PHONE_REGEX.is_match(phone)
}
