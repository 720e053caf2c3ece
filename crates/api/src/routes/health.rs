//! Health check endpoints.

use axum::Json;
use serde::Serialize;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `OK` while the process serves requests.
    pub message: &'static str,
}

/// Health check handler.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { message: "OK" })
}
