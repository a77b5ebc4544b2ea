//! Gallery domain: saved try-on results and gallery queries.

mod collection;
mod item;
mod query;

pub use collection::Gallery;
pub use item::{GalleryItem, DEFAULT_TAGS};
pub use query::{GalleryFilter, GalleryQuery};
