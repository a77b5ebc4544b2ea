//! Mock clothing category detection tables.
//!
//! A file name hint wins; otherwise a weighted draw picks the category.

use std::time::Duration;

use crate::clothing::Category;

pub const DEFAULT_DETECTION_DELAY: Duration = Duration::from_millis(1000);

/// Checked in order. `dress` comes first so names like `shirt-dress` resolve
/// to a dress, and `shirt` comes last because it is a substring of many names.
pub const CATEGORY_KEYWORDS: [(Category, &[&str]); 6] = [
    (Category::Dress, &["dress", "vestido"]),
    (Category::Jacket, &["jacket", "jaqueta", "casaco", "coat", "blazer", "hoodie"]),
    (Category::Pants, &["pants", "calça", "calca", "jeans", "trouser", "shorts", "bermuda"]),
    (Category::Shoes, &["shoe", "sapato", "tenis", "tênis", "sneaker", "boot", "bota", "sandal"]),
    (
        Category::Accessories,
        &["accessor", "acessorio", "acessório", "bolsa", "handbag", "chapeu", "chapéu", "belt", "cinto", "oculos", "óculos", "glasses"],
    ),
    (Category::Shirt, &["shirt", "camisa", "camiseta", "blusa"]),
];

/// Fallback weights out of 100. Shoes are never drawn.
pub const CATEGORY_WEIGHTS: [(Category, u32); 5] = [
    (Category::Shirt, 35),
    (Category::Dress, 25),
    (Category::Pants, 20),
    (Category::Jacket, 15),
    (Category::Accessories, 5),
];

pub fn category_from_file_name(file_name: &str) -> Option<Category> {
    let name = file_name.to_lowercase();
    if name.trim().is_empty() {
        return None;
    }
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map(|(category, _)| *category)
}

/// Maps a uniform draw in `0..100` onto [`CATEGORY_WEIGHTS`].
///
/// Draws at or past the total fall into the last bucket.
pub fn weighted_category(draw: u32) -> Category {
    let mut upper = 0;
    for (category, weight) in CATEGORY_WEIGHTS {
        upper += weight;
        if draw < upper {
            return category;
        }
    }
    CATEGORY_WEIGHTS[CATEGORY_WEIGHTS.len() - 1].0
}
