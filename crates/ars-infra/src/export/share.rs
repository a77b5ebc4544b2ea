use anyhow::bail;
use async_trait::async_trait;
use ars_core::export::ShareRequest;
use ars_core::ports::SharePort;

/// Share capability of a host without a native share sheet.
#[derive(Debug, Default)]
pub struct HeadlessShare;

#[async_trait]
impl SharePort for HeadlessShare {
    fn is_available(&self) -> bool {
        false
    }

    async fn share(&self, request: &ShareRequest) -> anyhow::Result<()> {
        bail!("native share unavailable for {}", request.title)
    }
}
