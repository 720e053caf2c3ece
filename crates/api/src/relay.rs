//! Hand a request body to the configured storage backend.

use relay_core::storage::{Storage, upload};
use relay_shared::{AppError, AppResult};
use tracing::error;

use crate::AppState;

/// Uploads `body` to the state's container.
///
/// Backend failures are logged here and reported as [`AppError::Storage`];
/// each surface decides how that looks to its client.
pub async fn store_body<S: Storage>(state: &AppState<S>, body: &str) -> AppResult<()> {
    upload(state.storage.as_ref(), &state.container, body)
        .await
        .map_err(|e| {
            error!(error = %e, container = %state.container, "failed to upload file");
            AppError::Storage(e.to_string())
        })
}
