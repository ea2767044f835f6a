// HTTP Server modules
pub mod handlers;
pub mod models;
pub mod routes;

// Relay core
pub mod config;
pub mod error;
pub mod extract;
pub mod relay;
pub mod session;
pub mod upload;

// LLM gateway layer
pub mod llm;
