//! Storage error types.

use opendal::ErrorKind;
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No client handle could be built for the container.
    #[error("{provider} client for '{container}' could not be configured: {source}")]
    Configuration {
        /// Provider name (`s3`, `azure_blob`).
        provider: &'static str,
        /// Destination bucket or container.
        container: String,
        /// Error returned while building the client.
        #[source]
        source: opendal::Error,
    },

    /// The backend rejected or failed the write.
    #[error("{provider} write of '{name}' to '{container}' failed: {source}")]
    Write {
        /// Provider name (`s3`, `azure_blob`).
        provider: &'static str,
        /// Destination bucket or container.
        container: String,
        /// Object key or blob name.
        name: String,
        /// Error returned by the backend client.
        #[source]
        source: opendal::Error,
    },
}

impl StorageError {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(
        provider: &'static str,
        container: impl Into<String>,
        source: opendal::Error,
    ) -> Self {
        Self::Configuration {
            provider,
            container: container.into(),
            source,
        }
    }

    /// Create a write error.
    #[must_use]
    pub fn write(
        provider: &'static str,
        container: impl Into<String>,
        name: impl Into<String>,
        source: opendal::Error,
    ) -> Self {
        Self::Write {
            provider,
            container: container.into(),
            name: name.into(),
            source,
        }
    }

    /// Classify a client failure. OpenDAL reports builder failures as
    /// `ConfigInvalid`; everything else happened during the request.
    #[must_use]
    pub fn from_client(
        provider: &'static str,
        container: &str,
        name: &str,
        source: opendal::Error,
    ) -> Self {
        if source.kind() == ErrorKind::ConfigInvalid {
            Self::configuration(provider, container, source)
        } else {
            Self::write(provider, container, name, source)
        }
    }

    /// The underlying backend error.
    #[must_use]
    pub fn backend_error(&self) -> &opendal::Error {
        match self {
            Self::Configuration { source, .. } | Self::Write { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_display() {
        let err = StorageError::write(
            "s3",
            "relay-demo",
            "2024-03-05T10:15:30-request.json",
            opendal::Error::new(ErrorKind::PermissionDenied, "access denied"),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("s3 write of '2024-03-05T10:15:30-request.json' to 'relay-demo' failed"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_backend_error_kept_verbatim() {
        let err = StorageError::write(
            "azure_blob",
            "relay-demo",
            "blob",
            opendal::Error::new(ErrorKind::RateLimited, "slow down"),
        );
        assert_eq!(err.backend_error().kind(), ErrorKind::RateLimited);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_client_classifies_config_errors() {
        let err = StorageError::from_client(
            "s3",
            "",
            "name",
            opendal::Error::new(ErrorKind::ConfigInvalid, "bucket is empty"),
        );
        assert!(matches!(err, StorageError::Configuration { provider: "s3", .. }));
        assert!(err.to_string().contains("could not be configured"));

        let err = StorageError::from_client(
            "s3",
            "relay-demo",
            "name",
            opendal::Error::new(ErrorKind::Unexpected, "connection reset"),
        );
        assert!(matches!(err, StorageError::Write { .. }));
    }
}
