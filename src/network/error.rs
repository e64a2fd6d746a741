//! Error type for movie API calls.

use thiserror::Error;

/// Failure of a movie API call.
///
/// Cloneable and comparable so it can live inside screen state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The requested resource does not exist.
    #[error("The requested resource could not be found")]
    NotFound,

    /// The API key is missing or rejected.
    #[error("Invalid or missing API key")]
    Unauthorized,

    /// The request exceeded its total timeout.
    #[error("Request timeout after {duration}s")]
    RequestTimeout { duration: u64 },

    /// The server could not be reached.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The server answered with a non-success status.
    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl NetworkError {
    /// Map an HTTP status and optional server message to an error.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => NetworkError::Unauthorized,
            404 => NetworkError::NotFound,
            _ => NetworkError::Upstream {
                status,
                message: message.unwrap_or_else(|| "no message".to_string()),
            },
        }
    }

    /// Short machine-readable kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            NetworkError::NotFound => "not_found",
            NetworkError::Unauthorized => "unauthorized",
            NetworkError::RequestTimeout { .. } => "request_timeout",
            NetworkError::Connection(_) => "connection_error",
            NetworkError::Upstream { .. } => "upstream_error",
            NetworkError::Decode(_) => "decode_error",
        }
    }
}
