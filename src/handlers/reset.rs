// POST /reset handler

use crate::models::ChatResponse;
use crate::relay::Relay;
use std::convert::Infallible;
use std::sync::Arc;

pub const RESET_REPLY: &str = "Conversation and PDF context have been reset.";

pub async fn reset_handler(relay: Arc<Relay>) -> Result<impl warp::Reply, Infallible> {
    tracing::info!("POST /reset");
    relay.handle_reset();
    Ok(warp::reply::json(&ChatResponse::new(RESET_REPLY)))
}
