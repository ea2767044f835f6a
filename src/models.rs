// Request and response bodies for the HTTP surface

use serde::{Deserialize, Serialize};

// Request Types
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    /// Missing or null field is treated as an empty message
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// Parse a raw `/chat` body
    ///
    /// Anything that is not a JSON object with a string `message` yields an
    /// empty request, so it is answered as an empty message.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

// Response Types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub reply: String,
}

impl ChatResponse {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageResponse {
    pub message: String,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PingResponse {
    pub ok: bool,
    /// Unix time in milliseconds
    pub ts: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_deserialization() {
        let request: ChatRequest = serde_json::from_str(r#"{"message":"Hello"}"#).unwrap();
        assert_eq!(request.message(), "Hello");
    }

    #[test]
    fn test_chat_request_missing_or_null_message_is_empty() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.message(), "");

        let request: ChatRequest = serde_json::from_str(r#"{"message":null}"#).unwrap();
        assert_eq!(request.message(), "");
    }

    #[test]
    fn test_chat_request_from_unparseable_body_is_empty() {
        for body in [&b"{not json"[..], b"hello", b"", br#"{"message":5}"#, b"[]"] {
            assert_eq!(ChatRequest::from_body(body).message(), "");
        }
        assert_eq!(ChatRequest::from_body(br#"{"message":"hi"}"#).message(), "hi");
    }

    #[test]
    fn test_image_response_serialization() {
        let response = ImageResponse {
            message: "Image received".to_string(),
            filename: "cat.png".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["message"], "Image received");
        assert_eq!(value["filename"], "cat.png");
    }

    #[test]
    fn test_ping_response_serialization() {
        let value = serde_json::to_value(PingResponse { ok: true, ts: 1700000000000 }).unwrap();
        assert_eq!(value, serde_json::json!({"ok": true, "ts": 1700000000000i64}));
    }
}
