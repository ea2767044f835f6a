//! Groq provider implementation
//!
//! Client for Groq's OpenAI-compatible chat-completion endpoint. Any other
//! endpoint speaking the same wire format can be targeted through
//! `GroqConfig::endpoint`.

pub mod client;
pub mod types;

// Re-export commonly used types
pub use client::{GroqClient, GroqConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL};
