use std::sync::Arc;

use tracing::{info, warn};

use ars_core::export::{share_request, ExportOrigin};
use ars_core::ports::{ClipboardPort, SharePort};
use ars_core::tryon::TryOnResult;

use super::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Native share sheet accepted the payload.
    Shared,
    /// The image URL was copied instead.
    LinkCopied,
}

/// Shares a result natively, falling back to copying its link.
pub struct ShareTryOn {
    share: Arc<dyn SharePort>,
    clipboard: Arc<dyn ClipboardPort>,
}

impl ShareTryOn {
    pub fn new(share: Arc<dyn SharePort>, clipboard: Arc<dyn ClipboardPort>) -> Self {
        Self { share, clipboard }
    }

    #[tracing::instrument(name = "usecase.share_try_on.execute", skip_all, fields(result_id = %result.id, ?origin))]
    pub async fn execute(
        &self,
        result: &TryOnResult,
        origin: ExportOrigin,
    ) -> Result<ShareOutcome, ExportError> {
        let request = share_request(result, origin);

        if self.share.is_available() {
            match self.share.share(&request).await {
                Ok(()) => {
                    info!(title = %request.title, "try-on shared");
                    return Ok(ShareOutcome::Shared);
                }
                Err(err) => warn!(error = %err, "native share failed, copying link"),
            }
        }

        self.clipboard
            .write_text(&request.url)
            .await
            .map_err(ExportError::Clipboard)?;
        info!("try-on link copied");
        Ok(ShareOutcome::LinkCopied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ars_core::clothing::find_catalog_item;
    use ars_core::ids::{TryOnId, UserId};
    use ars_core::ports::tests::{MockClipboard, MockShare};
    use chrono::Utc;

    fn result() -> TryOnResult {
        TryOnResult {
            id: TryOnId::from("abc"),
            user_id: UserId::placeholder(),
            original_photo_url: "blob:p".into(),
            clothing_item: find_catalog_item("2").unwrap(),
            result_image_url: "https://img.test/r.jpg".into(),
            transparent_result_url: None,
            created_at: Utc::now(),
            liked: false,
        }
    }

    #[tokio::test]
    async fn native_share_is_used_when_available() {
        let mut share = MockShare::new();
        share.expect_is_available().return_const(true);
        share
            .expect_share()
            .withf(|request| request.title == "Meu look no AR Style - Vestido Floral Verão")
            .times(1)
            .returning(|_| Ok(()));
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().never();

        let outcome = ShareTryOn::new(Arc::new(share), Arc::new(clipboard))
            .execute(&result(), ExportOrigin::Gallery)
            .await
            .unwrap();
        assert_eq!(outcome, ShareOutcome::Shared);
    }

    #[tokio::test]
    async fn unavailable_share_copies_the_link() {
        let mut share = MockShare::new();
        share.expect_is_available().return_const(false);
        share.expect_share().never();
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text| text.to_string() == "https://img.test/r.jpg")
            .times(1)
            .returning(|_| Ok(()));

        let outcome = ShareTryOn::new(Arc::new(share), Arc::new(clipboard))
            .execute(&result(), ExportOrigin::Result)
            .await
            .unwrap();
        assert_eq!(outcome, ShareOutcome::LinkCopied);
    }

    #[tokio::test]
    async fn failed_share_falls_back_to_clipboard() {
        let mut share = MockShare::new();
        share.expect_is_available().return_const(true);
        share
            .expect_share()
            .returning(|_| Err(anyhow::anyhow!("dismissed")));
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().times(1).returning(|_| Ok(()));

        let outcome = ShareTryOn::new(Arc::new(share), Arc::new(clipboard))
            .execute(&result(), ExportOrigin::Result)
            .await
            .unwrap();
        assert_eq!(outcome, ShareOutcome::LinkCopied);
    }

    #[tokio::test]
    async fn clipboard_failure_is_an_error() {
        let mut share = MockShare::new();
        share.expect_is_available().return_const(false);
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .returning(|_| Err(anyhow::anyhow!("no clipboard")));

        let err = ShareTryOn::new(Arc::new(share), Arc::new(clipboard))
            .execute(&result(), ExportOrigin::Result)
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Clipboard(_)));
    }
}
