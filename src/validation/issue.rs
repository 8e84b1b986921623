//! Validation issue record.

use serde::{Deserialize, Serialize};

/// A single problem found while validating payroll input.
///
/// `row` is the 1-based position of the employee in the batch, or 0 for
/// company settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// The row the issue belongs to.
    pub row: usize,
    /// The field that failed validation (e.g., "tin").
    pub field: String,
    /// A human-readable description of the problem.
    pub message: String,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    pub fn new(row: usize, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}: {}: {}", self.row, self.field, self.message)
    }
}
