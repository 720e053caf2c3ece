//! Tracing subscriber setup shared by every entrypoint.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a JSON formatter with caller location.
///
/// `RUST_LOG` wins over `default_directives` when set.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init(default_directives: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives.into()))
        .with(
            fmt::layer()
                .json()
                .with_file(true)
                .with_line_number(true)
                .with_current_span(false),
        )
        .init();
}
