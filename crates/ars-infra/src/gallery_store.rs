//! File-based gallery store
//!
//! Persists the session gallery as a JSON array in the application data
//! directory. Loading and saving only happen when the orchestrator asks.

use async_trait::async_trait;
use ars_core::gallery::Gallery;
use ars_core::ports::GalleryStorePort;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub const DEFAULT_GALLERY_FILE: &str = "gallery.json";

pub struct JsonGalleryStore {
    gallery_path: PathBuf,
}

impl JsonGalleryStore {
    pub fn new(gallery_path: PathBuf) -> Self {
        Self { gallery_path }
    }

    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            gallery_path: base_dir.join(DEFAULT_GALLERY_FILE),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.gallery_path
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.gallery_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl GalleryStorePort for JsonGalleryStore {
    async fn load(&self) -> anyhow::Result<Gallery> {
        if !self.gallery_path.exists() {
            return Ok(Gallery::default());
        }

        let content = fs::read_to_string(&self.gallery_path).await?;
        if content.trim().is_empty() {
            return Ok(Gallery::default());
        }

        let gallery: Gallery = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse gallery: {e}"))?;
        debug!(items = gallery.len(), path = %self.gallery_path.display(), "gallery loaded");
        Ok(gallery)
    }

    async fn save(&self, gallery: &Gallery) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(gallery)
            .map_err(|e| anyhow::anyhow!("Failed to serialize gallery: {e}"))?;

        let mut file = fs::File::create(&self.gallery_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create gallery file: {e}"))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write gallery file: {e}"))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync gallery file: {e}"))?;

        debug!(items = gallery.len(), "gallery saved");
        Ok(())
    }
}
