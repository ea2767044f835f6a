// Route definitions and handlers

use crate::handlers;
use crate::relay::Relay;
use std::convert::Infallible;
use std::sync::Arc;
use warp::multipart::FormData;
use warp::Filter;

/// Limit for `/chat` request bodies
const MAX_JSON_BYTES: u64 = 1024 * 1024;

/// Request headers accepted on cross-origin requests
const ALLOWED_HEADERS: [&str; 9] = [
    "accept",
    "accept-language",
    "authorization",
    "cache-control",
    "content-language",
    "content-type",
    "origin",
    "x-requested-with",
    "x-api-key",
];

pub fn configure_routes(
    relay: Arc<Relay>,
    max_upload_bytes: u64,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    // POST /chat
    let chat = warp::path("chat")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_JSON_BYTES))
        .and(warp::body::bytes())
        .and(with_relay(relay.clone()))
        .and_then(handlers::chat_handler);

    // POST /reset
    let reset = warp::path("reset")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_relay(relay.clone()))
        .and_then(handlers::reset_handler);

    // POST /upload
    let upload = warp::path("upload")
        .and(warp::path::end())
        .and(warp::post())
        .and(optional_form(max_upload_bytes))
        .and(with_relay(relay.clone()))
        .and_then(handlers::upload_handler);

    // POST /image
    let image = warp::path("image")
        .and(warp::path::end())
        .and(warp::post())
        .and(optional_form(max_upload_bytes))
        .and(with_relay(relay))
        .and_then(handlers::image_handler);

    // GET /ping
    let ping = warp::path("ping")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::ping_handler);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(ALLOWED_HEADERS.to_vec());

    // Error replies pass through the CORS wrapper; the outer recover only
    // sees rejected preflights.
    chat.or(reset)
        .or(upload)
        .or(image)
        .or(ping)
        .recover(handlers::handle_rejection)
        .with(cors)
        .recover(handlers::handle_rejection)
}

fn with_relay(relay: Arc<Relay>) -> impl Filter<Extract = (Arc<Relay>,), Error = Infallible> + Clone {
    warp::any().map(move || relay.clone())
}

/// Multipart body when the request declares one, `None` otherwise
///
/// A non-multipart request reaches the handler as a missing file rather than
/// being rejected.
fn optional_form(
    max_length: u64,
) -> impl Filter<Extract = (Option<FormData>,), Error = warp::Rejection> + Clone {
    let form = warp::multipart::form().max_length(max_length).map(Some);
    let not_multipart = warp::header::optional::<String>("content-type")
        .and_then(|content_type: Option<String>| async move {
            match content_type {
                Some(ct) if ct.to_ascii_lowercase().starts_with("multipart/") => {
                    Err(warp::reject())
                }
                _ => Ok::<Option<FormData>, warp::Rejection>(None),
            }
        });
    form.or(not_multipart).unify()
}
