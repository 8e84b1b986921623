//! Input validation for payroll batches.
//!
//! Validation gates what may be processed for real: required fields,
//! identifier formats, amount ranges and duplicate identifiers across a batch.
//! The calculation engine never calls into this module and accepts any
//! numeric input; callers decide whether to require a clean validation
//! result (processing) or to calculate regardless (previewing).

mod company;
mod duplicates;
mod employee;
mod formats;
mod issue;

pub use company::{COMPANY_ROW, validate_company_settings, validate_payroll_month};
pub use duplicates::{check_duplicate_ssnit, check_duplicate_tins};
pub use employee::{
    MAX_AMOUNT, MAX_OVERTIME_HOURS, generate_employee_id, validate_batch, validate_employee,
    validate_employees,
};
pub use formats::{
    PAYROLL_MONTH_REGEX, PHONE_REGEX, SSNIT_REGEX, TIN_REGEX, validate_phone, validate_ssnit,
    validate_tin,
};
pub use issue::ValidationIssue;
