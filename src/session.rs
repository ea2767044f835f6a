// Session context: the document text and nominal conversation log shared by handlers

use std::sync::{PoisonError, RwLock};

use crate::llm::ChatMessage;

/// Seed entry for the conversation log
pub const CONVERSATION_SEED: &str = "You are a helpful AI assistant like ChatGPT.";

/// Snapshot of the relay's short-lived context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Informational only; chat turns neither read nor append to it
    pub conversation_log: Vec<ChatMessage>,
    /// Text of the most recently uploaded document, empty when none is loaded
    pub document_text: String,
}

impl SessionContext {
    pub fn has_document(&self) -> bool {
        !self.document_text.is_empty()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            conversation_log: vec![ChatMessage::system(CONVERSATION_SEED)],
            document_text: String::new(),
        }
    }
}

/// Read/update/reset access to the session context
pub trait SessionStore: Send + Sync {
    /// Current state; no side effects
    fn get(&self) -> SessionContext;

    /// Replace the stored document text unconditionally
    fn set_document_text(&self, text: String);

    /// Restore the seed conversation log and clear the document text
    fn reset(&self);
}

/// Process-lifetime store. Last writer wins.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    inner: RwLock<SessionContext>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self) -> SessionContext {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_document_text(&self, text: String) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .document_text = text;
    }

    fn reset(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = SessionContext::default();
    }
}
