//! Calculation logic for the payroll engine.
//!
//! This module contains the pure functions that turn compensation inputs into
//! payroll figures: rounding, progressive PAYE, SSNIT contributions, flat-rate
//! bonus tax, overtime pay, the per-employee pipeline and batch totals. None
//! of them perform I/O, mutate their inputs or fail.

mod bonus_tax;
mod employee_payroll;
mod overtime;
mod paye;
mod rates;
mod rounding;
mod ssnit;
mod summary;

pub use bonus_tax::calculate_bonus_tax;
pub use employee_payroll::{is_consistent, process_employee, process_employees};
pub use overtime::{calculate_overtime_pay, hourly_rate};
pub use paye::{BracketTax, PayeBreakdown, calculate_paye, paye_breakdown};
pub use rates::{
    BONUS_TAX_RATE, OVERTIME_MULTIPLIER, SSNIT_EMPLOYEE_RATE, SSNIT_EMPLOYER_RATE,
    STANDARD_MONTHLY_HOURS, StatutoryRates, TAX_BRACKETS, TaxBracket,
};
pub use rounding::{round, round_money};
pub use ssnit::{SsnitContribution, calculate_ssnit};
pub use summary::calculate_summary_totals;
