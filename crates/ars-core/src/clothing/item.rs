use serde::{Deserialize, Serialize};

use super::Category;

/// A garment that can be tried on.
///
/// Either hand-built from a user upload or taken from the popular catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl ClothingItem {
    /// Item built from a user-uploaded garment once its category is known.
    pub fn custom(id: impl Into<String>, category: Category, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: format!("{} Personalizada", category.label()),
            category,
            image_url: image_url.into(),
            brand: None,
            price: None,
        }
    }
}
