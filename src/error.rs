// Error taxonomy for relay operations

use thiserror::Error;
use warp::http::StatusCode;

use crate::extract::ExtractionError;
use crate::llm::LlmError;
use crate::upload::UploadError;

/// Errors surfaced by the relay orchestrator
#[derive(Debug, Error)]
pub enum RelayError {
    /// Chat message was empty after trimming
    #[error("Message cannot be empty")]
    EmptyInput,

    /// Expected multipart file field was absent
    #[error("No file uploaded")]
    MissingFile,

    /// Chat-completion call failed (status, network, or decoding)
    #[error("Upstream error: {0}")]
    Upstream(#[from] LlmError),

    /// Document could not be converted to text
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Uploaded body could not be read or staged
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),
}

impl RelayError {
    /// HTTP status the handler boundary reports for this error
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::EmptyInput | RelayError::MissingFile => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) | RelayError::Extraction(_) | RelayError::Upload(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(RelayError::EmptyInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(RelayError::MissingFile.status(), StatusCode::BAD_REQUEST);
        assert!(RelayError::MissingFile.is_client_error());
    }

    #[test]
    fn test_upstream_errors_map_to_500() {
        let network = RelayError::from(LlmError::NetworkError("refused".to_string()));
        assert_eq!(network.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let status = RelayError::from(LlmError::HttpError {
            status: 401,
            body: "bad key".to_string(),
        });
        assert_eq!(status.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!status.is_client_error());
    }

    #[test]
    fn test_extraction_errors_map_to_500() {
        let err = RelayError::from(ExtractionError::Parse("bad".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("bad"));
    }
}
