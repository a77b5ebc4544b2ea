use crate::gallery::Gallery;

/// Explicit save/load boundary for the session gallery.
#[async_trait::async_trait]
pub trait GalleryStorePort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Gallery>;
    async fn save(&self, gallery: &Gallery) -> anyhow::Result<()>;
}
