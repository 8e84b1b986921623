//! Error types for the payroll engine.
//!
//! The calculation functions themselves are infallible. Errors arise only at
//! the edges: loading configuration and gating a batch on validation.

use thiserror::Error;

use crate::validation::ValidationIssue;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use ghana_payroll::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/company.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/company.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Company settings failed validation.
    #[error("Invalid company setting '{field}': {message}")]
    InvalidCompanySettings {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A batch could not be processed because validation found problems.
    #[error("Validation failed with {} issue(s)", .issues.len())]
    ValidationFailed {
        /// Every issue found.
        issues: Vec<ValidationIssue>,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
