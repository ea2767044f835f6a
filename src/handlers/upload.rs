// POST /upload handler

use crate::error::RelayError;
use crate::models::{ErrorResponse, UploadResponse};
use crate::relay::Relay;
use crate::upload::stage_field;
use std::convert::Infallible;
use std::sync::Arc;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::multipart::FormData;
use warp::reply::{Json, WithStatus};

/// Multipart field carrying the document
pub const FILE_FIELD: &str = "file";

pub const MISSING_FILE_ERROR: &str = "No file uploaded";
pub const PROCESSING_FAILED_ERROR: &str = "File processing failed";

/// `form` is `None` when the request was not multipart at all
pub async fn upload_handler(
    form: Option<FormData>,
    relay: Arc<Relay>,
) -> Result<WithStatus<Json>, Infallible> {
    let upload_id = Uuid::new_v4();
    tracing::info!(%upload_id, multipart = form.is_some(), "POST /upload");

    let result = match form {
        Some(form) => match stage_field(form, FILE_FIELD, relay.upload_dir()).await {
            Ok(staged) => {
                if let Some(staged) = &staged {
                    tracing::info!(
                        %upload_id,
                        filename = staged.filename().unwrap_or(""),
                        bytes = staged.size(),
                        "document staged"
                    );
                }
                relay.handle_upload(staged).await
            }
            Err(err) => Err(RelayError::from(err)),
        },
        None => relay.handle_upload(None).await,
    };

    Ok(match result {
        Ok(result) => {
            tracing::info!(%upload_id, chars = result.extracted_text.len(), "document extracted");
            warp::reply::with_status(
                warp::reply::json(&UploadResponse {
                    text: result.extracted_text,
                }),
                StatusCode::OK,
            )
        }
        Err(err) => {
            let message = if err.is_client_error() {
                tracing::warn!(%upload_id, error = %err, "rejected upload");
                MISSING_FILE_ERROR
            } else {
                tracing::error!(%upload_id, error = %err, "upload failed");
                PROCESSING_FAILED_ERROR
            };
            warp::reply::with_status(
                warp::reply::json(&ErrorResponse::new(message)),
                err.status(),
            )
        }
    })
}
