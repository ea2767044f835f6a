#![allow(dead_code)]

use async_trait::async_trait;
use pdfchat_relay::extract::{DocumentExtractor, ExtractionError};
use pdfchat_relay::llm::{ChatMessage, Completion, LlmError, LlmProvider};
use pdfchat_relay::relay::Relay;
use pdfchat_relay::session::InMemorySessionStore;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub const BOUNDARY: &str = "relay-test-boundary";

/// Provider that records every message list and answers from a script
#[derive(Default)]
pub struct RecordingProvider {
    calls: Mutex<Vec<Vec<ChatMessage>>>,
    reply: Mutex<Option<Result<Completion, u16>>>,
}

impl RecordingProvider {
    pub fn replying(text: &str) -> Arc<Self> {
        let provider = Self::default();
        *provider.reply.lock().unwrap() = Some(Ok(Completion::text(text)));
        Arc::new(provider)
    }

    pub fn failing(status: u16) -> Arc<Self> {
        let provider = Self::default();
        *provider.reply.lock().unwrap() = Some(Err(status));
        Arc::new(provider)
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_user_content(&self) -> String {
        let calls = self.calls();
        let last = calls.last().expect("provider was never called");
        last.last().expect("empty message list").content.clone()
    }
}

#[async_trait]
impl LlmProvider for RecordingProvider {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Completion, LlmError> {
        self.calls.lock().unwrap().push(messages);
        let reply = self.reply.lock().unwrap().clone();
        match reply {
            Some(Ok(completion)) => Ok(completion),
            Some(Err(status)) => Err(LlmError::HttpError {
                status,
                body: "scripted failure".to_string(),
            }),
            None => Ok(Completion::default()),
        }
    }
}

/// Extractor that returns queued results and checks the staged file exists
#[derive(Default)]
pub struct ScriptedExtractor {
    results: Mutex<VecDeque<Result<String, String>>>,
    seen: Mutex<Vec<Vec<u8>>>,
}

impl ScriptedExtractor {
    pub fn with(results: Vec<Result<&str, &str>>) -> Arc<Self> {
        let queue = results
            .into_iter()
            .map(|r| r.map(str::to_string).map_err(str::to_string))
            .collect();
        Arc::new(Self {
            results: Mutex::new(queue),
            seen: Mutex::new(Vec::new()),
        })
    }

    /// Contents of every staged file handed to the extractor
    pub fn seen(&self) -> Vec<Vec<u8>> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentExtractor for ScriptedExtractor {
    async fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path).map_err(|e| ExtractionError::Parse(e.to_string()))?;
        self.seen.lock().unwrap().push(bytes);
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted result".to_string()))
            .map_err(ExtractionError::Parse)
    }
}

pub fn relay(
    provider: Arc<RecordingProvider>,
    extractor: Arc<ScriptedExtractor>,
    upload_dir: &Path,
) -> Arc<Relay> {
    Arc::new(Relay::new(
        Arc::new(InMemorySessionStore::new()),
        provider,
        extractor,
        upload_dir,
    ))
}

/// Build a multipart body with a single file field
pub fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

/// Build a multipart body with a single plain text field (no filename)
pub fn multipart_text_field(field: &str, value: &str) -> Vec<u8> {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"{field}\"\r\n\r\n{value}\r\n--{b}--\r\n",
        b = BOUNDARY
    )
    .into_bytes()
}
