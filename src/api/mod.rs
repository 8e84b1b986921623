//! HTTP API for the payroll engine.
//!
//! Exposes the statutory rates, a preview endpoint that always calculates and
//! reports validation issues alongside the results, and a process endpoint
//! that only calculates a batch that validates cleanly.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrollRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
