/*
[INPUT]:  Error sources (HTTP status, transport, serialization, configuration)
[OUTPUT]: Structured error types distinguishing each dispatch failure
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Robinhood Crypto adapter
#[derive(Error, Debug)]
pub enum RobinhoodError {
    /// Server answered with a non-2xx status
    #[error("HTTP error (status {status}): {body}")]
    Http { status: StatusCode, body: String },

    /// Request never produced a response (DNS, connection, timeout, TLS)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Successful status but unusable body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credentials are still the placeholder values
    #[error("Credentials are not configured")]
    NotConfigured,
}

impl RobinhoodError {
    /// HTTP status of the response, if one was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RobinhoodError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }

    /// Check if the request failed before any response arrived
    pub fn is_transport(&self) -> bool {
        matches!(self, RobinhoodError::Transport(_))
    }

    /// Create an HTTP error from status code and response body
    pub fn http_error(status: StatusCode, body: impl Into<String>) -> Self {
        RobinhoodError::Http {
            status,
            body: body.into(),
        }
    }
}

/// Result type alias for Robinhood operations
pub type Result<T> = std::result::Result<T, RobinhoodError>;
