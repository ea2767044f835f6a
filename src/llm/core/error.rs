//! Error types for the LLM gateway layer

use thiserror::Error;

/// Errors that can occur when calling the chat-completion upstream
#[derive(Debug, Error)]
pub enum LlmError {
    /// Upstream answered with a non-success status
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// Connection could not be established or was dropped
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response body could not be decoded
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Client could not be constructed from its configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl LlmError {
    /// True when the request never produced an HTTP response
    pub fn is_network(&self) -> bool {
        matches!(self, LlmError::NetworkError(_))
    }

    /// True for failures worth another attempt
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::NetworkError(_) => true,
            LlmError::HttpError { status, .. } => is_retryable_status_code(*status),
            _ => false,
        }
    }
}

/// Statuses that indicate a transient upstream condition
pub fn is_retryable_status_code(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            LlmError::HttpError {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else if err.is_decode() {
            LlmError::SerializationError(err.to_string())
        } else {
            LlmError::NetworkError(err.to_string())
        }
    }
}
