//! Container service routes.
//!
//! `POST /demo` stores the body and echoes it back as a JSON string.

use axum::{
    Json, Router,
    extract::{State, rejection::StringRejection},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use relay_core::storage::Storage;

use super::{error_response, health::health_check, read_body};
use crate::{AppState, relay::store_body};

/// Creates the container service routes.
pub fn routes<S: Storage + 'static>() -> Router<AppState<S>> {
    Router::new()
        .route("/", get(health_check))
        .route("/demo", post(upload_demo::<S>))
}

/// POST `/demo`
async fn upload_demo<S: Storage>(
    State(state): State<AppState<S>>,
    body: Result<String, StringRejection>,
) -> Response {
    let body = match read_body(body) {
        Ok(body) => body,
        Err(e) => return error_response(&e),
    };

    match store_body(&state, &body).await {
        Ok(()) => Json(body).into_response(),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::MockStorage;
    use crate::{AppState, create_container_router};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn assert_cors(response: &axum::response::Response) {
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-headers"], "Content-Type");
        assert_eq!(headers["access-control-allow-methods"], "POST");
    }

    fn post_demo(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/demo")
            .header("origin", "https://example.com")
            .body(body.into())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_container_router(AppState::new(MockStorage::succeeding(), "relay-demo"));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "message": "OK" }));
    }

    #[tokio::test]
    async fn test_upload_echoes_body_as_json_string() {
        let state = AppState::new(MockStorage::succeeding(), "relay-demo");
        let app = create_container_router(state.clone());

        let response = app.oneshot(post_demo(r#"{"hello":"world"}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert_eq!(json_body(response).await, json!(r#"{"hello":"world"}"#));

        let writes = state.storage.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].container, "relay-demo");
        assert_eq!(writes[0].data, r#"{"hello":"world"}"#);
    }

    #[tokio::test]
    async fn test_upload_failure_returns_500() {
        let app = create_container_router(AppState::new(
            MockStorage::failing("access denied"),
            "relay-demo",
        ));

        let response = app.oneshot(post_demo("payload")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors(&response);
        assert_eq!(
            json_body(response).await,
            json!({ "message": "Failed to fetch data" })
        );
    }

    #[tokio::test]
    async fn test_non_utf8_body_is_bad_request() {
        let state = AppState::new(MockStorage::succeeding(), "relay-demo");
        let app = create_container_router(state.clone());

        let response = app.oneshot(post_demo(vec![0xff, 0xfe, 0xfd])).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({ "message": "Bad Request" }));
        assert!(state.storage.writes().is_empty());
    }

    #[tokio::test]
    async fn test_empty_body_is_uploaded() {
        let state = AppState::new(MockStorage::succeeding(), "relay-demo");
        let app = create_container_router(state.clone());

        let response = app.oneshot(post_demo(Body::empty())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.storage.writes()[0].data, "");
    }

    #[tokio::test]
    async fn test_body_above_axum_default_limit_is_uploaded() {
        let state = AppState::new(MockStorage::succeeding(), "relay-demo");
        let app = create_container_router(state.clone());
        let payload = "a".repeat(3 * 1024 * 1024);

        let response = app.oneshot(post_demo(payload.clone())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let writes = state.storage.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].data.len(), payload.len());
    }
}
