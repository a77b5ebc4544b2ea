use std::path::Path;

use anyhow::{Context, Result};
use ars_core::photo::ImageHandle;
use image::ImageFormat;
use tokio::fs;

const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Builds a handle for an image file on disk.
///
/// The MIME type comes from the file extension; contents are never decoded.
pub async fn image_handle_from_path(path: impl AsRef<Path>) -> Result<ImageHandle> {
    let path = path.as_ref();
    let metadata = fs::metadata(path)
        .await
        .with_context(|| format!("read metadata of {}", path.display()))?;
    if !metadata.is_file() {
        anyhow::bail!("{} is not a file", path.display());
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))?;
    let mime_type = ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(UNKNOWN_MIME_TYPE);

    Ok(ImageHandle::new(file_name, mime_type, metadata.len()).with_location(path))
}
