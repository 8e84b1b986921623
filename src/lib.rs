//! Monthly payroll engine for Ghana.
//!
//! This crate turns employee compensation inputs into statutory deductions
//! and net pay: progressive PAYE income tax, SSNIT social-security
//! contributions on basic salary, the flat bonus tax and overtime pay. It also
//! validates payroll input, aggregates batch totals and serves everything over
//! a small HTTP API.
//!
//! # Example
//!
//! ```
//! use ghana_payroll::calculation::{calculate_summary_totals, process_employees};
//! use ghana_payroll::models::Employee;
//! use rust_decimal::Decimal;
//!
//! let employee = Employee {
//!     employee_name: "Kofi Mensah".to_string(),
//!     basic_salary: Some(Decimal::new(5000, 0)),
//!     allowances: Some(Decimal::new(500, 0)),
//!     ..Default::default()
//! };
//!
//! let results = process_employees(&[employee]);
//! let summary = calculate_summary_totals(&results);
//!
//! assert_eq!(results[0].net_pay, Decimal::new(432025, 2));
//! assert_eq!(summary.total_net_pay, Decimal::new(432025, 2));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
