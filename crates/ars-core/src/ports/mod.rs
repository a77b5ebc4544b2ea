//! Port interfaces for the application layer
//!
//! Ports define the contract between the try-on use cases and the
//! infrastructure that backs them. Randomness, time and every host-provided
//! capability (object URLs, downloads, sharing, clipboard, storage) sit
//! behind a port so flows can be driven deterministically in tests.

mod clock;
mod export;
mod flow_event;
mod gallery_store;
mod photo_url;
mod progress;
mod random;

#[cfg(any(test, feature = "testing"))]
pub mod tests;

pub use clock::ClockPort;
pub use export::{ClipboardPort, DownloadPort, SharePort};
pub use flow_event::FlowEventPort;
pub use gallery_store::GalleryStorePort;
pub use photo_url::PhotoUrlPort;
pub use progress::ProgressPort;
pub use random::RandomPort;
