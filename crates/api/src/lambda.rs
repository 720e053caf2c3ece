//! API Gateway proxy integration for serverless runtimes.
//!
//! The runtime loop lives in the `bootstrap` binary; this module only turns a
//! proxy event into a proxy response so it can be tested without one.

pub use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use axum::http::HeaderMap;
use relay_core::storage::Storage;
use relay_shared::AppError;
use tracing::debug;

use crate::{AppState, cors::cors_headers, relay::store_body};

fn with_cors(status_code: u16, body: impl Into<String>) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: i64::from(status_code),
        headers: cors_headers().into_iter().collect::<HeaderMap>(),
        body: Some(Body::Text(body.into())),
        ..ApiGatewayProxyResponse::default()
    }
}

fn from_error(err: &AppError) -> ApiGatewayProxyResponse {
    with_cors(err.status_code(), err.public_message())
}

/// Stores the event body and echoes it back.
///
/// A `null` event yields 400, a failed upload 500, both with CORS headers.
pub async fn handle_proxy_event<S: Storage>(
    state: &AppState<S>,
    event: Option<ApiGatewayProxyRequest>,
) -> ApiGatewayProxyResponse {
    let Some(event) = event else {
        return from_error(&AppError::BadRequest("missing event".to_string()));
    };
    debug!(method = %event.http_method, path = ?event.path, "received event");

    let body = event.body.unwrap_or_default();
    match store_body(state, &body).await {
        Ok(()) => with_cors(200, body),
        Err(e) => from_error(&e),
    }
}
