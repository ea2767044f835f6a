//! Relay orchestrator
//!
//! Composes outbound model requests from the user's message and the session's
//! document text, and applies uploads and resets to the session.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::RelayError;
use crate::extract::DocumentExtractor;
use crate::llm::{ChatMessage, LlmProvider};
use crate::session::{SessionContext, SessionStore};
use crate::upload::{ReceivedImage, StagedUpload};

/// System instruction sent ahead of every user turn
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";

/// Reply used when the upstream response carries no text
pub const FALLBACK_REPLY: &str = "No response from LLaMA 3.";

/// Result of a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub extracted_text: String,
}

/// Acknowledgement of a received image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReceipt {
    pub filename: String,
}

/// Build the message list for one chat turn
///
/// The whole document text is inlined verbatim whenever one is loaded.
pub fn compose_messages(message: &str, context: &SessionContext) -> Vec<ChatMessage> {
    let user = if context.has_document() {
        format!(
            "PDF Content: {}\n\nUser Question: {}",
            context.document_text, message
        )
    } else {
        message.to_string()
    };
    vec![ChatMessage::system(SYSTEM_INSTRUCTION), ChatMessage::user(user)]
}

/// Request handling logic shared by the HTTP handlers
pub struct Relay {
    session: Arc<dyn SessionStore>,
    provider: Arc<dyn LlmProvider>,
    extractor: Arc<dyn DocumentExtractor>,
    upload_dir: PathBuf,
}

impl Relay {
    pub fn new(
        session: Arc<dyn SessionStore>,
        provider: Arc<dyn LlmProvider>,
        extractor: Arc<dyn DocumentExtractor>,
        upload_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            session,
            provider,
            extractor,
            upload_dir: upload_dir.into(),
        }
    }

    /// Directory uploads are staged in
    pub fn upload_dir(&self) -> &std::path::Path {
        &self.upload_dir
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// Forward a chat message, with any loaded document as context
    pub async fn handle_chat(&self, message: &str) -> Result<String, RelayError> {
        if message.trim().is_empty() {
            return Err(RelayError::EmptyInput);
        }

        let context = self.session.get();
        let messages = compose_messages(message, &context);
        tracing::debug!(
            with_document = context.has_document(),
            document_bytes = context.document_text.len(),
            "composed chat request"
        );

        let completion = self.provider.complete(messages).await?;
        Ok(completion
            .non_empty_content()
            .unwrap_or(FALLBACK_REPLY)
            .to_string())
    }

    /// Extract text from an uploaded document and make it the session's context
    ///
    /// The staged file is consumed and deleted before this returns.
    pub async fn handle_upload(
        &self,
        file: Option<StagedUpload>,
    ) -> Result<UploadResult, RelayError> {
        let file = file.ok_or(RelayError::MissingFile)?;
        let extracted = self.extractor.extract(file.path()).await;
        drop(file);

        let text = extracted?;
        self.session.set_document_text(text.clone());
        Ok(UploadResult {
            extracted_text: text,
        })
    }

    /// Acknowledge an image upload; nothing is stored or forwarded
    pub fn handle_image_upload(
        &self,
        file: Option<ReceivedImage>,
    ) -> Result<ImageReceipt, RelayError> {
        let file = file.ok_or(RelayError::MissingFile)?;
        Ok(ImageReceipt {
            filename: file.filename.unwrap_or_default(),
        })
    }

    /// Clear the document text and reinitialize the conversation log
    pub fn handle_reset(&self) {
        self.session.reset();
    }
}
