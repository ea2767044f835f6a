//! Core types for the LLM gateway layer

use serde::{Deserialize, Serialize};

/// A single message in an outbound chat-completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Plain text content
    pub content: String,
}

impl ChatMessage {
    /// Create a new system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instructions for the model
    System,
    /// Human input
    User,
    /// Model output
    Assistant,
}

/// Result of a single completion call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    /// Text of the first choice, if the upstream returned one
    pub content: Option<String>,
    /// Finish reason reported for the first choice
    pub finish_reason: Option<FinishReason>,
    /// Token usage, if reported
    pub usage: Option<UsageMetadata>,
}

impl Completion {
    /// A completion carrying only text
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Text content if present and non-empty
    pub fn non_empty_content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

/// Reason why generation finished
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural completion
    Stop,
    /// Hit token limit
    Length,
    /// Blocked by content filters
    ContentFilter,
    /// Provider-specific reason
    #[serde(untagged)]
    Other(String),
}

/// Token usage information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageMetadata {
    /// Prompt tokens consumed
    #[serde(rename = "prompt_tokens", default)]
    pub input_tokens: u32,
    /// Response tokens generated
    #[serde(rename = "completion_tokens", default)]
    pub output_tokens: u32,
    /// Sum of input and output
    #[serde(default)]
    pub total_tokens: u32,
}

impl UsageMetadata {
    /// Create new usage metadata
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let msg = ChatMessage::system("Be brief");
        assert_eq!(msg.role, MessageRole::System);
        assert_eq!(msg.content, "Be brief");

        let msg = ChatMessage::user("Hello");
        assert_eq!(msg.role, MessageRole::User);
    }

    #[test]
    fn test_message_serialization() {
        let json = serde_json::to_value(ChatMessage::user("Hello")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "Hello"}));
    }

    #[test]
    fn test_finish_reason_deserialization() {
        let reason: FinishReason = serde_json::from_str("\"stop\"").unwrap();
        assert_eq!(reason, FinishReason::Stop);

        let reason: FinishReason = serde_json::from_str("\"length\"").unwrap();
        assert_eq!(reason, FinishReason::Length);

        let reason: FinishReason = serde_json::from_str("\"tool_calls\"").unwrap();
        assert_eq!(reason, FinishReason::Other("tool_calls".to_string()));
    }

    #[test]
    fn test_usage_deserialization() {
        let json = r#"{"prompt_tokens":12,"completion_tokens":30,"total_tokens":42}"#;
        let usage: UsageMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(usage, UsageMetadata::new(12, 30));
    }

    #[test]
    fn test_non_empty_content() {
        assert_eq!(Completion::text("4").non_empty_content(), Some("4"));
        assert_eq!(Completion::text("").non_empty_content(), None);
        assert_eq!(Completion::default().non_empty_content(), None);
    }
}
