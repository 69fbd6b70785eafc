//! Tracing subscriber initialization for the CLI.
//!
//! Scenario results go to stdout, so diagnostics are written to stderr.
//! Respects the `RUST_LOG` environment variable, defaulting to "info"; set
//! `RUST_LOG=trace` to watch the calculator's placement decisions.

use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize the tracing subscriber with stderr output.
///
/// # Errors
///
/// [`LoggingError::SubscriberAlreadySet`] when a global subscriber has
/// already been installed.
pub fn init() -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
