//! Groq client implementation

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::llm::core::{
    config::RetryConfig,
    error::LlmError,
    provider::LlmProvider,
    retry::execute_with_retry,
    types::{ChatMessage, Completion},
};

use super::types::{ChatCompletionRequest, ChatCompletionResponse};

/// Groq's OpenAI-compatible chat-completion endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Connection settings for [`GroqClient`]
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// Bearer credential
    pub api_key: String,
    /// Full URL of the chat-completion endpoint
    pub endpoint: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Retry policy for transient failures
    pub retry: RetryConfig,
}

impl GroqConfig {
    /// Create a config for the default endpoint and model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            retry: RetryConfig::default(),
        }
    }

    /// Set the endpoint URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the retry policy
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

/// Client for an OpenAI-compatible chat-completion API
pub struct GroqClient {
    /// HTTP client for making requests
    http_client: Client,
    config: GroqConfig,
}

impl GroqClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: GroqConfig) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                LlmError::InvalidConfiguration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Make a single request to the upstream
    async fn send_once(&self, messages: &[ChatMessage]) -> Result<Completion, LlmError> {
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages,
        };

        let response = self
            .http_client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        // Check status
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| String::new());
            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;

        tracing::debug!(
            id = parsed.id.as_deref().unwrap_or(""),
            choices = parsed.choices.as_ref().map_or(0, Vec::len),
            "upstream response received"
        );

        let completion = Completion::from(parsed);
        if let Some(usage) = completion.usage {
            tracing::debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                total_tokens = usage.total_tokens,
                finish_reason = ?completion.finish_reason,
                "upstream token usage"
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl LlmProvider for GroqClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Completion, LlmError> {
        execute_with_retry(&self.config.retry, || self.send_once(&messages)).await
    }
}
