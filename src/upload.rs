// Multipart file handling: locate a named field and stage it to a temporary file

use bytes::Buf;
use futures_util::TryStreamExt;
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use warp::multipart::{FormData, Part};

/// Errors raised while reading or staging an uploaded file
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to read multipart body: {0}")]
    Multipart(#[from] warp::Error),

    #[error("Failed to stage upload: {0}")]
    Io(#[from] std::io::Error),
}

/// An uploaded file buffered on disk
///
/// The backing file is deleted when this value is dropped, whichever way the
/// request that owns it ends.
#[derive(Debug)]
pub struct StagedUpload {
    file: NamedTempFile,
    filename: Option<String>,
    size: u64,
}

impl StagedUpload {
    /// Stage an in-memory payload under `dir`
    pub async fn from_bytes(
        dir: &Path,
        filename: Option<String>,
        data: &[u8],
    ) -> Result<Self, UploadError> {
        let (file, mut writer) = create_in(dir)?;
        writer.write_all(data).await?;
        writer.flush().await?;
        Ok(Self {
            file,
            filename,
            size: data.len() as u64,
        })
    }

    /// Stream a multipart part to a temp file under `dir`
    pub async fn from_part(dir: &Path, mut part: Part) -> Result<Self, UploadError> {
        let filename = part.filename().map(str::to_string);
        let (file, mut writer) = create_in(dir)?;
        let mut size = 0u64;

        while let Some(chunk) = part.data().await {
            let mut chunk = chunk?;
            while chunk.has_remaining() {
                let slice = chunk.chunk();
                writer.write_all(slice).await?;
                let n = slice.len();
                size += n as u64;
                chunk.advance(n);
            }
        }
        writer.flush().await?;

        Ok(Self {
            file,
            filename,
            size,
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

fn create_in(dir: &Path) -> Result<(NamedTempFile, tokio::fs::File), UploadError> {
    let file = tempfile::Builder::new().prefix("upload-").tempfile_in(dir)?;
    let writer = tokio::fs::File::from_std(file.reopen()?);
    Ok((file, writer))
}

/// An image part that was read and discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedImage {
    pub filename: Option<String>,
    pub size: u64,
}

impl ReceivedImage {
    /// Drain a part without keeping its contents
    pub async fn from_part(part: Part) -> Result<Self, UploadError> {
        let filename = part.filename().map(str::to_string);
        let size = part
            .stream()
            .try_fold(0u64, |acc, buf| async move { Ok(acc + buf.remaining() as u64) })
            .await?;
        Ok(Self { filename, size })
    }
}

/// Whether `part` is a file sent under `field`
///
/// A part without a filename is a plain form value, not a file.
fn is_file_field(part: &Part, field: &str) -> bool {
    part.name() == field && part.filename().is_some()
}

/// Stage the first file part named `field` under `dir`
///
/// Other parts are skipped. `None` when the form has no such file.
pub async fn stage_field(
    form: FormData,
    field: &str,
    dir: &Path,
) -> Result<Option<StagedUpload>, UploadError> {
    let mut form = std::pin::pin!(form);
    while let Some(part) = form.try_next().await? {
        if is_file_field(&part, field) {
            return StagedUpload::from_part(dir, part).await.map(Some);
        }
    }
    Ok(None)
}

/// Drain the first file part named `field`, keeping only its metadata
pub async fn receive_field(form: FormData, field: &str) -> Result<Option<ReceivedImage>, UploadError> {
    let mut form = std::pin::pin!(form);
    while let Some(part) = form.try_next().await? {
        if is_file_field(&part, field) {
            return ReceivedImage::from_part(part).await.map(Some);
        }
    }
    Ok(None)
}
