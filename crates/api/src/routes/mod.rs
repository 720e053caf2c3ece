//! HTTP route definitions.

use axum::{
    Json,
    extract::rejection::StringRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use relay_shared::AppError;
use serde_json::json;
use tracing::{debug, error};

pub mod container;
pub mod function;
pub mod health;

/// Turns an [`AppError`] into a `{"message": ...}` response.
pub fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "message": err.public_message() }))).into_response()
}

/// Unwraps the extracted body, rejecting unreadable or non-UTF-8 input.
///
/// A body over the router's limit keeps its 413 status.
fn read_body(body: Result<String, StringRejection>) -> Result<String, AppError> {
    let body = body.map_err(|e| {
        error!(error = %e, "failed to read body");
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(e.body_text())
        } else {
            AppError::BadRequest(e.body_text())
        }
    })?;
    debug!(bytes = body.len(), "received request");
    Ok(body)
}
