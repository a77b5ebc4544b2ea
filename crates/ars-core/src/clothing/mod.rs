//! Clothing domain: categories, items and the popular catalog.

mod catalog;
mod category;
mod item;

pub use catalog::{find_catalog_item, popular_clothing};
pub use category::{Category, CategoryParseError};
pub use item::ClothingItem;
