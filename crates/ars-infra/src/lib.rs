pub mod export;
pub mod gallery_store;
pub mod photo;
pub mod random;
pub mod time;

pub use export::{HeadlessShare, HttpDownloadSink, SystemClipboard};
pub use gallery_store::JsonGalleryStore;
pub use photo::{image_handle_from_path, ObjectUrlRegistry};
pub use random::{SeededRandom, ThreadRandom};
pub use time::SystemClock;
