//! Error types for the upstream client

use thiserror::Error;

/// Errors that can occur when asking the upstream API
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// No credential configured; raised before any network call
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Upstream could not be reached, timed out, or sent an unreadable body
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Upstream answered with a non-success status
    #[error("Upstream rejected request (status {status}): {message}")]
    UpstreamRejected { status: u16, message: String },
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Gateway(err.to_string())
    }
}
