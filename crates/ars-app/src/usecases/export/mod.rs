//! Download and share of try-on results.

mod download;
mod share;

pub use download::DownloadTryOn;
pub use share::{ShareOutcome, ShareTryOn};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("result has no transparent variant")]
    TransparentUnavailable,
    #[error("download failed: {0}")]
    Download(#[source] anyhow::Error),
    #[error("copying link failed: {0}")]
    Clipboard(#[source] anyhow::Error),
}
