// POST /image handler

use crate::error::RelayError;
use crate::models::{ErrorResponse, ImageResponse};
use crate::relay::Relay;
use crate::upload::receive_field;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::multipart::FormData;
use warp::reply::{Json, WithStatus};

/// Multipart field carrying the image
pub const IMAGE_FIELD: &str = "image";

pub const IMAGE_RECEIVED: &str = "Image received";
pub const MISSING_IMAGE_ERROR: &str = "No image uploaded.";
pub const IMAGE_FAILED_ERROR: &str = "Image processing failed.";

pub async fn image_handler(
    form: Option<FormData>,
    relay: Arc<Relay>,
) -> Result<WithStatus<Json>, Infallible> {
    tracing::info!(multipart = form.is_some(), "POST /image");

    let received = match form {
        Some(form) => receive_field(form, IMAGE_FIELD).await.map_err(RelayError::from),
        None => Ok(None),
    };

    Ok(match received.and_then(|image| relay.handle_image_upload(image)) {
        Ok(receipt) => {
            tracing::info!(filename = %receipt.filename, "image received");
            warp::reply::with_status(
                warp::reply::json(&ImageResponse {
                    message: IMAGE_RECEIVED.to_string(),
                    filename: receipt.filename,
                }),
                StatusCode::OK,
            )
        }
        Err(err) => {
            let message = if err.is_client_error() {
                tracing::warn!(error = %err, "rejected image upload");
                MISSING_IMAGE_ERROR
            } else {
                tracing::error!(error = %err, "image upload failed");
                IMAGE_FAILED_ERROR
            };
            warp::reply::with_status(
                warp::reply::json(&ErrorResponse::new(message)),
                err.status(),
            )
        }
    })
}
