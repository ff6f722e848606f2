//! Client error model

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Any failure talking to the inventory service
///
/// The UI treats every variant the same way ("operation failed"); the split
/// exists for logs and tests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, timeout, TLS, or a body that was not JSON
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was JSON but not the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("item not found: {0}")]
    NotFound(String),

    /// The in-process store was switched off
    #[error("service unavailable")]
    Unavailable,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
