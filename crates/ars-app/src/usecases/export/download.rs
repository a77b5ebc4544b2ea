use std::sync::Arc;

use tracing::info;

use ars_core::export::{download_file_name, image_url, ExportOrigin, ImageVariant};
use ars_core::ports::DownloadPort;
use ars_core::tryon::TryOnResult;

use super::ExportError;

/// Saves a result image under its export file name.
pub struct DownloadTryOn {
    download: Arc<dyn DownloadPort>,
}

impl DownloadTryOn {
    pub fn new(download: Arc<dyn DownloadPort>) -> Self {
        Self { download }
    }

    /// Returns the file name the image was saved under.
    #[tracing::instrument(name = "usecase.download_try_on.execute", skip_all, fields(result_id = %result.id, ?origin, ?variant))]
    pub async fn execute(
        &self,
        result: &TryOnResult,
        origin: ExportOrigin,
        variant: ImageVariant,
    ) -> Result<String, ExportError> {
        let url = image_url(result, variant).ok_or(ExportError::TransparentUnavailable)?;
        let file_name = download_file_name(result, origin, variant);

        self.download
            .save(url, &file_name)
            .await
            .map_err(ExportError::Download)?;

        info!(file_name = %file_name, "try-on image downloaded");
        Ok(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ars_core::clothing::find_catalog_item;
    use ars_core::ids::{TryOnId, UserId};
    use chrono::Utc;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingDownloads {
        saved: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl DownloadPort for RecordingDownloads {
        async fn save(&self, url: &str, file_name: &str) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("connection reset");
            }
            self.saved
                .lock()
                .await
                .push((url.to_string(), file_name.to_string()));
            Ok(())
        }
    }

    fn result(transparent: Option<&str>) -> TryOnResult {
        TryOnResult {
            id: TryOnId::from("abc"),
            user_id: UserId::placeholder(),
            original_photo_url: "blob:p".into(),
            clothing_item: find_catalog_item("3").unwrap(),
            result_image_url: "https://img.test/r.jpg".into(),
            transparent_result_url: transparent.map(str::to_string),
            created_at: Utc::now(),
            liked: false,
        }
    }

    #[tokio::test]
    async fn downloads_standard_image_with_result_prefix() {
        let sink = Arc::new(RecordingDownloads::default());
        let name = DownloadTryOn::new(sink.clone())
            .execute(&result(None), ExportOrigin::Result, ImageVariant::Standard)
            .await
            .unwrap();

        assert_eq!(name, "ar-style-look-abc.jpg");
        assert_eq!(
            sink.saved.lock().await.as_slice(),
            &[("https://img.test/r.jpg".to_string(), name)]
        );
    }

    #[tokio::test]
    async fn downloads_transparent_variant_from_gallery() {
        let sink = Arc::new(RecordingDownloads::default());
        let name = DownloadTryOn::new(sink.clone())
            .execute(
                &result(Some("https://img.test/r.jpg&bg=transparent")),
                ExportOrigin::Gallery,
                ImageVariant::Transparent,
            )
            .await
            .unwrap();

        assert_eq!(name, "ar-style-abc_transparent.png");
        assert_eq!(sink.saved.lock().await[0].0, "https://img.test/r.jpg&bg=transparent");
    }

    #[tokio::test]
    async fn transparent_without_url_is_rejected() {
        let sink = Arc::new(RecordingDownloads::default());
        let err = DownloadTryOn::new(sink.clone())
            .execute(&result(None), ExportOrigin::Result, ImageVariant::Transparent)
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::TransparentUnavailable));
        assert!(sink.saved.lock().await.is_empty());
    }

    #[tokio::test]
    async fn sink_failure_is_reported() {
        let sink = Arc::new(RecordingDownloads {
            fail: true,
            ..Default::default()
        });
        let err = DownloadTryOn::new(sink)
            .execute(&result(None), ExportOrigin::Result, ImageVariant::Standard)
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Download(_)));
    }
}
