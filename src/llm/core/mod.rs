//! Core abstractions for the LLM gateway layer

pub mod config;
pub mod error;
pub mod provider;
pub mod retry;
pub mod types;
