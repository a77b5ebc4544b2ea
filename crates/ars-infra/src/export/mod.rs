//! Host capabilities used when exporting a look.

mod clipboard;
mod download;
mod share;

pub use clipboard::SystemClipboard;
pub use download::HttpDownloadSink;
pub use share::HeadlessShare;
