//! Payroll run envelope.
//!
//! A [`PayrollRun`] bundles the per-employee results and batch summary of one
//! processing request together with identifying metadata, and is what output
//! sinks (results tables, exporters, report generators) consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BatchSummary, CompanySettings, PayrollResult};
use crate::validation::ValidationIssue;

/// The complete output of processing one payroll batch.
///
/// # Example
///
/// ```
/// use ghana_payroll::models::{BatchSummary, CompanySettings, PayrollRun};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let run = PayrollRun {
///     run_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     company: CompanySettings::default(),
///     payroll_month: "2026-01".to_string(),
///     results: vec![],
///     summary: BatchSummary::default(),
///     validation_issues: vec![],
/// };
/// assert!(run.is_clean());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that computed the run.
    pub engine_version: String,
    /// The employer the run belongs to.
    pub company: CompanySettings,
    /// The month processed, in `YYYY-MM` format.
    pub payroll_month: String,
    /// One result per input row, in input order.
    pub results: Vec<PayrollResult>,
    /// Totals across `results`.
    pub summary: BatchSummary,
    /// Problems found in the input (always empty for a processed run).
    #[serde(default)]
    pub validation_issues: Vec<ValidationIssue>,
}

impl PayrollRun {
    /// Returns true if the input passed validation without issues.
    pub fn is_clean(&self) -> bool {
        self.validation_issues.is_empty()
    }
}
