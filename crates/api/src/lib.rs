//! Hosting surfaces for the upload relay.
//!
//! This crate provides:
//! - Container service router (`POST /demo`, `GET /`)
//! - Function custom-handler router (`POST /api/demo`)
//! - API Gateway proxy event handler for serverless runtimes
//! - CORS policy shared by all of them
//!
//! Every surface receives an already constructed storage adapter and the
//! destination container through [`AppState`]; nothing here is global.

pub mod cors;
pub mod lambda;
pub mod relay;
pub mod routes;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use relay_core::storage::Storage;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers.
pub struct AppState<S> {
    /// Storage adapter, built once at startup.
    pub storage: Arc<S>,
    /// Destination bucket or container.
    pub container: Arc<str>,
}

impl<S> AppState<S> {
    /// Creates state from an adapter and a container name.
    pub fn new(storage: S, container: impl Into<Arc<str>>) -> Self {
        Self {
            storage: Arc::new(storage),
            container: container.into(),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            container: Arc::clone(&self.container),
        }
    }
}

/// Creates the container service router.
///
/// Request bodies are not size-limited; the hosting platform caps them.
pub fn create_container_router<S: Storage + 'static>(state: AppState<S>) -> Router {
    cors::apply(routes::container::routes::<S>().layer(TraceLayer::new_for_http()))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

/// Creates the function custom-handler router.
pub fn create_function_router<S: Storage + 'static>(state: AppState<S>) -> Router {
    cors::apply(routes::function::routes::<S>().layer(TraceLayer::new_for_http()))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}

/// Binds `addr` and serves `app` until the process exits.
pub async fn serve(app: Router, addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await
}
