//! Wire types for the OpenAI-compatible chat-completion API
//!
//! Every response field is optional: a body that parses as JSON but lacks the
//! expected shape is not an error at this layer.

use serde::{Deserialize, Serialize};

use crate::llm::core::types::{ChatMessage, Completion, FinishReason, UsageMetadata};

/// Request body for `POST /chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    /// Model identifier
    pub model: &'a str,
    /// Ordered conversation
    pub messages: &'a [ChatMessage],
}

/// Response body for `POST /chat/completions`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
    #[serde(default)]
    pub usage: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<ChatCompletionResponse> for Completion {
    fn from(response: ChatCompletionResponse) -> Self {
        let first = response.choices.unwrap_or_default().into_iter().next();
        let finish_reason = first.as_ref().and_then(|c| c.finish_reason.clone());
        let content = first.and_then(|c| c.message).and_then(|m| m.content);
        Completion {
            content,
            finish_reason,
            usage: response.usage,
        }
    }
}
