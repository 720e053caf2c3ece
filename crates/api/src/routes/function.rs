//! Function custom-handler routes.
//!
//! The Functions host forwards HTTP triggers to `/api/{function}`. The stored
//! body is echoed back as the JSON object it contains.

use axum::{
    Json, Router,
    extract::{State, rejection::StringRejection},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use relay_core::storage::Storage;
use relay_shared::AppError;
use serde_json::{Map, Value};
use tracing::error;

use super::{error_response, health::health_check, read_body};
use crate::{AppState, relay::store_body};

/// Creates the function routes.
pub fn routes<S: Storage + 'static>() -> Router<AppState<S>> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/demo", post(upload_demo::<S>))
}

/// POST `/api/demo`
///
/// The upload happens before the body is parsed, so a body that is not a
/// JSON object is still stored and then answered with a 500.
async fn upload_demo<S: Storage>(
    State(state): State<AppState<S>>,
    body: Result<String, StringRejection>,
) -> Response {
    let result = async {
        let body = read_body(body)?;
        store_body(&state, &body).await?;
        parse_object(&body)
    }
    .await;

    match result {
        Ok(object) => Json(object).into_response(),
        Err(e) => error_response(&e),
    }
}

fn parse_object(body: &str) -> Result<Map<String, Value>, AppError> {
    serde_json::from_str(body).map_err(|e| {
        error!(error = %e, "failed to unmarshal body");
        AppError::InvalidPayload(e.to_string())
    })
}
