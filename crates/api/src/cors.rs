//! CORS policy for upload responses.

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

/// Headers attached to every upload response, success or failure.
pub fn cors_headers() -> [(HeaderName, HeaderValue); 3] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST"),
        ),
    ]
}

/// Layer answering preflight requests for the HTTP routers.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::POST])
}

/// Wraps `router` so preflights are answered and every response, including
/// plain POSTs and errors, carries all of [`cors_headers`].
///
/// `CorsLayer` only emits the allow-headers and allow-methods pair on
/// preflight responses, so the fixed set is written over it afterwards.
pub fn apply<T>(router: Router<T>) -> Router<T>
where
    T: Clone + Send + Sync + 'static,
{
    cors_headers()
        .into_iter()
        .fold(router.layer(cors_layer()), |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(name, value))
        })
}
