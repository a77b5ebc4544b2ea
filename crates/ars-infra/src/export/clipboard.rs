use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use ars_core::ports::ClipboardPort;
use clipboard_rs::{Clipboard, ClipboardContext};
use tokio::task::spawn_blocking;

/// System clipboard through `clipboard-rs`.
///
/// A context is opened per write so a headless host only fails when a link
/// is actually copied.
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardPort for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let text = text.to_string();
        spawn_blocking(move || {
            let context =
                ClipboardContext::new().map_err(|e| anyhow!("open clipboard: {e}"))?;
            context
                .set_text(text)
                .map_err(|e| anyhow!("write clipboard text: {e}"))
        })
        .await
        .context("clipboard task panicked")?
    }
}
