// GET /ping handler

use crate::models::PingResponse;
use chrono::Utc;
use std::convert::Infallible;

pub async fn ping_handler() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&PingResponse {
        ok: true,
        ts: Utc::now().timestamp_millis(),
    }))
}
