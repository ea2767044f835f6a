// Document text extraction

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while turning a document into text
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The document could not be parsed
    #[error("Failed to parse document: {0}")]
    Parse(String),

    /// The extraction task panicked or was cancelled
    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Converts a staged document into plain text
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}

/// Extracts text from PDF files with `pdf-extract`
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

#[async_trait]
impl DocumentExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let path: PathBuf = path.to_path_buf();
        // pdf-extract is synchronous and CPU-bound
        tokio::task::spawn_blocking(move || pdf_extract::extract_text(&path))
            .await
            .map_err(|e| ExtractionError::Task(e.to_string()))?
            .map_err(|e| ExtractionError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_rejects_non_pdf() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a pdf").unwrap();

        let result = PdfExtractor.extract(file.path()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PdfExtractor.extract(&dir.path().join("absent.pdf")).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display() {
        let err = ExtractionError::Parse("bad xref".to_string());
        assert!(err.to_string().contains("bad xref"));
    }
}
