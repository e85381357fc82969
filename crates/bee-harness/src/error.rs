//! Harness error type.

use thiserror::Error;

/// Failure outside of test assertions: I/O on logs and reports, or bad
/// configuration.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Fs(#[from] bee_core::FsError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid {key}={value:?}: {reason}")]
    Config {
        key: &'static str,
        value: String,
        reason: String,
    },
}
