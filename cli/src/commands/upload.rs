//! Image files read from disk.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use image::ImageFormat;
use pressdesk_shared::article_form::{validate_image, ImageFile};

use super::{api_failure, Client};

const UPLOAD_FAILED: &str = "Failed to upload image";

/// Read `path` into an [`ImageFile`]. The MIME type is guessed from the
/// extension; unknown extensions become `application/octet-stream` and are
/// rejected by validation.
pub fn image_file(path: &Path) -> Result<ImageFile<Vec<u8>>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let mime = ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| "application/octet-stream".to_string());
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    Ok(ImageFile {
        name,
        mime,
        size: bytes.len() as u64,
        data: bytes,
    })
}

/// Validate and upload a standalone image; returns its URL.
pub async fn upload(client: &Client, path: &Path) -> Result<String> {
    let file = image_file(path)?;
    validate_image(&file.mime, file.size)
        .with_context(|| format!("cannot upload {}", path.display()))?;
    let url = client
        .upload_image(&file.name, &file.mime, file.data)
        .await
        .map_err(|err| api_failure(err, UPLOAD_FAILED))?;
    tracing::info!(file = %file.name, %url, "image uploaded");
    Ok(url)
}
