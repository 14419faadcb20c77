/*
[INPUT]:  Error sources (HTTP, API status, serialization, session storage)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the task API adapter
#[derive(Error, Debug)]
pub enum TaskAppError {
    /// HTTP request failed before a response arrived (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-2xx response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Session marker could not be read or written
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TaskAppError {
    /// Check if the error happened at the transport level (no HTTP status)
    pub fn is_transport(&self) -> bool {
        matches!(self, TaskAppError::Http(_))
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            TaskAppError::Api { status, .. } => Some(*status),
            TaskAppError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TaskAppError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for task API operations
pub type Result<T> = std::result::Result<T, TaskAppError>;
