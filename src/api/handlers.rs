//! HTTP request handlers for the shift attendance API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::attendance::{
    describe_windows, evaluate, filter_records, summarize, validate_check_in, validate_check_out,
};
use crate::config::{AccessSettings, TimeSettings};
use crate::error::AttendanceError;
use crate::models::{CheckInSubmission, CheckOutSubmission};

use super::request::{EvaluateRequest, RecordQueryRequest};
use super::response::{
    ApiError, ApiErrorResponse, CheckInAccepted, CheckOutAccepted, RecordListing,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/shifts/:shift/windows", get(windows_handler))
        .route(
            "/settings/time",
            get(get_time_settings_handler).put(put_time_settings_handler),
        )
        .route(
            "/settings/access",
            get(get_access_settings_handler).put(put_access_settings_handler),
        )
        .route("/check-in", post(check_in_handler))
        .route("/check-out", post(check_out_handler))
        .route("/records/query", post(records_query_handler))
        .with_state(state)
}

/// Handler for POST /evaluate.
///
/// Evaluates check-in/check-out times against the current time settings.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let settings = state.time_settings();
    match evaluate(
        &request.check_in_time,
        &request.check_out_time,
        &request.shift,
        &settings,
    ) {
        Ok(status) => {
            info!(
                correlation_id = %correlation_id,
                shift = %request.shift,
                check_in_status = %status.check_in_status,
                check_out_status = %status.check_out_status,
                "Evaluation completed"
            );
            ok(status)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /shifts/:shift/windows.
async fn windows_handler(State(state): State<AppState>, Path(shift): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    match describe_windows(&shift, &state.time_settings()) {
        Ok(windows) => ok(windows),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /settings/time.
async fn get_time_settings_handler(State(state): State<AppState>) -> Response {
    ok(state.time_settings())
}

/// Handler for PUT /settings/time.
///
/// The new settings are validated before being persisted; on failure the
/// previous settings stay in effect.
async fn put_time_settings_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimeSettings>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Updating time settings");

    let settings = match payload {
        Ok(Json(settings)) => settings,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.update_time_settings(settings).await {
        Ok(()) => ok(state.time_settings()),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /settings/access.
async fn get_access_settings_handler(State(state): State<AppState>) -> Response {
    ok(state.access_settings())
}

/// Handler for PUT /settings/access.
async fn put_access_settings_handler(
    State(state): State<AppState>,
    payload: Result<Json<AccessSettings>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Updating access settings");

    let settings = match payload {
        Ok(Json(settings)) => settings,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.update_access_settings(settings).await {
        Ok(()) => ok(state.access_settings()),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /check-in.
async fn check_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckInSubmission>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let accepted = validate_check_in(&submission, &state.access_settings()).and_then(|shift| {
        describe_windows(shift.name(), &state.time_settings())
            .map(|windows| CheckInAccepted { shift, windows })
    });

    match accepted {
        Ok(accepted) => {
            info!(correlation_id = %correlation_id, shift = %accepted.shift, "Check-in accepted");
            ok(accepted)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /check-out.
async fn check_out_handler(payload: Result<Json<CheckOutSubmission>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match validate_check_out(&submission) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                logbook_entries = submission.logbook.len(),
                "Check-out accepted"
            );
            ok(CheckOutAccepted {
                logbook_entries: submission.logbook.len(),
            })
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /records/query.
///
/// Annotates the supplied records with their status, applies the viewer's
/// visibility and the query filters, and counts the statuses of what is
/// left. Employees get 403 when the dashboard is closed to them.
async fn records_query_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecordQueryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let submitted = request.records.len();
    match filter_records(
        request.records,
        &request.viewer,
        &request.query,
        &state.access_settings(),
        &state.time_settings(),
    ) {
        Ok(records) => {
            let summary = summarize(&records);
            info!(
                correlation_id = %correlation_id,
                submitted,
                returned = summary.total,
                late = summary.late,
                overtime = summary.overtime,
                "Record query completed"
            );
            ok(RecordListing { summary, records })
        }
        Err(err) => error_response(correlation_id, err),
    }
}

fn ok<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

fn error_response(correlation_id: Uuid, err: AttendanceError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    ApiErrorResponse::from(err).into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
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

    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}
