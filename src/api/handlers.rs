//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{StatutoryRates, calculate_summary_totals, process_employees};
use crate::error::EngineError;
use crate::models::{CompanySettings, Employee, PayrollRun};
use crate::validation::{ValidationIssue, validate_batch, validate_payroll_month};

use super::request::PayrollRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rates", get(rates_handler))
        .route("/payroll/preview", post(preview_handler))
        .route("/payroll/process", post(process_handler))
        .with_state(state)
}

/// Handler for GET /rates.
async fn rates_handler() -> Json<StatutoryRates> {
    Json(StatutoryRates::current())
}

/// Handler for POST /payroll/preview.
///
/// Always calculates, even when the input has validation issues; the issues
/// are returned alongside the results.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Result<Json<PayrollRun>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll preview request");

    let request = parse_request(payload, correlation_id)?;
    let batch = prepare_batch(&state, request);

    if !batch.issues.is_empty() {
        info!(
            correlation_id = %correlation_id,
            issues = batch.issues.len(),
            "Preview input has validation issues"
        );
    }

    Ok(Json(run_batch(batch, correlation_id)))
}

/// Handler for POST /payroll/process.
///
/// Refuses to calculate unless the batch validates cleanly.
async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Result<Json<PayrollRun>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = parse_request(payload, correlation_id)?;
    let batch = prepare_batch(&state, request);

    if !batch.issues.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            employee_count = batch.employees.len(),
            issues = batch.issues.len(),
            "Payroll rejected by validation"
        );
        return Err(EngineError::ValidationFailed {
            issues: batch.issues,
        }
        .into());
    }

    Ok(Json(run_batch(batch, correlation_id)))
}

/// A request resolved against configuration and validated.
struct PreparedBatch {
    company: CompanySettings,
    employees: Vec<Employee>,
    issues: Vec<ValidationIssue>,
}

fn prepare_batch(state: &AppState, mut request: PayrollRequest) -> PreparedBatch {
    request.assign_missing_ids();

    let mut company = state.company().clone();
    let mut issues = Vec::new();

    if let Some(month) = request.payroll_month {
        issues.extend(validate_payroll_month(&month));
        company.payroll_month = month;
    }
    issues.extend(validate_batch(&request.employees));

    PreparedBatch {
        company,
        employees: request.employees,
        issues,
    }
}

fn run_batch(batch: PreparedBatch, correlation_id: Uuid) -> PayrollRun {
    let start_time = Instant::now();

    let results = process_employees(&batch.employees);
    let summary = calculate_summary_totals(&results);

    info!(
        correlation_id = %correlation_id,
        payroll_month = %batch.company.payroll_month,
        employee_count = summary.employee_count,
        total_gross_pay = %summary.total_gross_pay,
        total_net_pay = %summary.total_net_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll calculated"
    );

    PayrollRun {
        run_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        payroll_month: batch.company.payroll_month.clone(),
        company: batch.company,
        results,
        summary,
        validation_issues: batch.issues,
    }
}

/// Maps body extraction failures to 400 responses.
fn parse_request(
    payload: Result<Json<PayrollRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<PayrollRequest, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::new(StatusCode::BAD_REQUEST, error))
}
