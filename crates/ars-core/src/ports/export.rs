use crate::export::ShareRequest;

/// Host sink that persists a named file fetched from `url`.
#[async_trait::async_trait]
pub trait DownloadPort: Send + Sync {
    async fn save(&self, url: &str, file_name: &str) -> anyhow::Result<()>;
}

/// Native share capability of the host.
#[async_trait::async_trait]
pub trait SharePort: Send + Sync {
    fn is_available(&self) -> bool;
    async fn share(&self, request: &ShareRequest) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
pub trait ClipboardPort: Send + Sync {
    async fn write_text(&self, text: &str) -> anyhow::Result<()>;
}
