//! HTTP request handlers for the Daily Timeclock Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_timesheet, normalize_clock_input};

use super::request::TimesheetRequest;
use super::response::{ApiError, TimesheetResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/timesheet", post(timesheet_handler))
        .with_state(state)
}

/// Handler for POST /timesheet.
///
/// Normalizes the raw contracted duration and markings, computes the daily
/// totals, and returns them in both raw-minute and `HH:mm` form. The
/// computation is total, so a well-formed request always yields 200; only
/// malformed JSON is rejected.
async fn timesheet_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimesheetRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Keystroke-level sanitation runs server-side, so raw digit strings
    // such as "0800" are accepted.
    let contracted = normalize_clock_input(&request.contracted);
    let markings: Vec<String> = request
        .markings
        .iter()
        .map(|m| normalize_clock_input(m))
        .collect();

    let totals = compute_timesheet(&contracted, &markings, state.config().config());
    info!(
        correlation_id = %correlation_id,
        markings_count = markings.len(),
        worked_minutes = totals.worked_minutes,
        night_premium_minutes = totals.night_premium_minutes,
        "Timesheet computed"
    );

    let response: TimesheetResponse = totals.into();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
