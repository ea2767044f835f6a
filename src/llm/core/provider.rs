//! Provider trait for chat-completion gateways

use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{ChatMessage, Completion},
};

/// Main interface that every chat-completion gateway must satisfy
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send an ordered message list and wait for the full reply
    ///
    /// # Arguments
    /// * `messages` - Conversation to send, system instruction first
    ///
    /// # Returns
    /// The parsed completion, or an error if the call or decoding fails
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Completion, LlmError>;
}
