//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Errors an entrypoint turns into a response.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request could not be read.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The upload to the storage backend failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The stored payload could not be echoed back as JSON.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The request body exceeded the server's body limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::PayloadTooLarge(_) => 413,
            Self::Storage(_) | Self::InvalidPayload(_) => 500,
        }
    }

    /// Message exposed to clients. Details stay in the logs.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "Bad Request",
            Self::Storage(_) => "Failed to fetch data",
            Self::InvalidPayload(_) => "Failed to parse response",
            Self::PayloadTooLarge(_) => "Payload Too Large",
        }
    }
}
