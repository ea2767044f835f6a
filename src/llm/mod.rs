//! LLM Gateway Layer
//!
//! This module provides a small interface for sending a composed message list
//! to an OpenAI-compatible chat-completion API and reading back the reply.

pub mod core;
pub mod groq;

// Re-export commonly used types
pub use core::{
    config::RetryConfig,
    error::LlmError,
    provider::LlmProvider,
    types::{ChatMessage, Completion, FinishReason, MessageRole, UsageMetadata},
};

pub use groq::{GroqClient, GroqConfig};
