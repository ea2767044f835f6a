// POST /chat handler

use crate::error::RelayError;
use crate::models::{ChatRequest, ChatResponse};
use crate::relay::Relay;
use bytes::Bytes;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;

pub const EMPTY_MESSAGE_REPLY: &str = "Message cannot be empty.";
pub const UPSTREAM_FAILURE_REPLY: &str = "Error connecting to Groq API.";

/// Every outcome, malformed bodies included, is answered with `{reply}`.
pub async fn chat_handler(body: Bytes, relay: Arc<Relay>) -> Result<impl warp::Reply, Infallible> {
    let request = ChatRequest::from_body(&body);
    tracing::info!(message_len = request.message().len(), "POST /chat");

    let (status, reply) = match relay.handle_chat(request.message()).await {
        Ok(reply) => (StatusCode::OK, reply),
        Err(err @ RelayError::EmptyInput) => {
            tracing::warn!(error = %err, "rejected chat request");
            (err.status(), EMPTY_MESSAGE_REPLY.to_string())
        }
        Err(err) => {
            let network = matches!(&err, RelayError::Upstream(e) if e.is_network());
            tracing::error!(error = %err, network, "chat request failed");
            (err.status(), UPSTREAM_FAILURE_REPLY.to_string())
        }
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ChatResponse::new(reply)),
        status,
    ))
}
