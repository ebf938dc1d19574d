//! Error types for repository fetching.

use thiserror::Error;

/// Errors that can occur while fetching the repository list.
///
/// The `Display` text is what the list screen shows to the user.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection refused, TLS and so on)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Server answered with a non-success status
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not a repository list
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Failure reported by a service implementation without a richer type
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Classify a reqwest error, separating out timeouts.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_seconds: u64) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                seconds: timeout_seconds,
            }
        } else {
            FetchError::Request(err)
        }
    }
}
