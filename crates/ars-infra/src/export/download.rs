use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use ars_core::ports::DownloadPort;
use tokio::fs;
use tracing::info;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches result images over HTTP into a downloads directory.
pub struct HttpDownloadSink {
    client: reqwest::Client,
    downloads_dir: PathBuf,
}

impl HttpDownloadSink {
    pub fn new(downloads_dir: PathBuf) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .context("build HTTP client")?;
        Ok(Self {
            client,
            downloads_dir,
        })
    }

    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }
}

#[async_trait]
impl DownloadPort for HttpDownloadSink {
    async fn save(&self, url: &str, file_name: &str) -> Result<()> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url}"))?;
        let bytes = response.bytes().await.context("read download body")?;

        fs::create_dir_all(&self.downloads_dir)
            .await
            .with_context(|| format!("create {}", self.downloads_dir.display()))?;
        let target = self.downloads_dir.join(file_name);
        fs::write(&target, &bytes)
            .await
            .with_context(|| format!("write {}", target.display()))?;

        info!(path = %target.display(), bytes = bytes.len(), "download saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use tempfile::TempDir;

    #[tokio::test]
    async fn saves_response_body_under_file_name() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/look.jpg")
            .with_status(200)
            .with_header("content-type", "image/jpeg")
            .with_body(b"jpeg-bytes")
            .create_async()
            .await;

        let temp_dir = TempDir::new().unwrap();
        let sink = HttpDownloadSink::new(temp_dir.path().join("downloads")).unwrap();
        sink.save(&format!("{}/look.jpg", server.url()), "ar-style-look-1.jpg")
            .await
            .unwrap();

        mock.assert_async().await;
        let saved = std::fs::read(sink.downloads_dir().join("ar-style-look-1.jpg")).unwrap();
        assert_eq!(saved, b"jpeg-bytes");
    }

    #[tokio::test]
    async fn http_error_writes_nothing() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/gone.jpg")
            .with_status(404)
            .create_async()
            .await;

        let temp_dir = TempDir::new().unwrap();
        let sink = HttpDownloadSink::new(temp_dir.path().to_path_buf()).unwrap();
        let result = sink
            .save(&format!("{}/gone.jpg", server.url()), "ar-style-1.jpg")
            .await;

        assert!(result.is_err());
        assert!(!temp_dir.path().join("ar-style-1.jpg").exists());
    }
}
