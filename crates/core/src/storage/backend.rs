//! The storage capability.

use std::future::Future;

/// Writes a named blob of text into a named container.
///
/// Implementors own their backend client handle and keep no per-call state,
/// so one instance is built at startup and shared by every request.
pub trait Storage: Send + Sync {
    /// Failure reported by the backend.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Store `data` under `name` in `container`.
    ///
    /// Create-or-replace: writing the same `(container, name)` twice keeps the
    /// second payload.
    fn save_file(
        &self,
        container: &str,
        name: &str,
        data: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
