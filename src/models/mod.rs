//! Core data models for the payroll engine.
//!
//! This module contains the input rows, calculated results and batch-level
//! envelopes shared by the engine and its collaborators.

mod company;
mod employee;
mod payroll_result;
mod payroll_run;

pub use company::{CompanySettings, parse_payroll_month};
pub use employee::{CompensationInput, Employee};
pub use payroll_result::{BatchSummary, PayrollResult};
pub use payroll_run::PayrollRun;
