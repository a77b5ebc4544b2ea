use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Garment classification used for filtering, labeling and mock detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Shirt,
    Pants,
    Dress,
    Jacket,
    Shoes,
    Accessories,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown clothing category: {0}")]
pub struct CategoryParseError(pub String);

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Shirt,
        Category::Pants,
        Category::Dress,
        Category::Jacket,
        Category::Shoes,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Shirt => "shirt",
            Category::Pants => "pants",
            Category::Dress => "dress",
            Category::Jacket => "jacket",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
        }
    }

    /// Display label shown next to the garment.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Shirt => "Camisa",
            Category::Pants => "Calça",
            Category::Dress => "Vestido",
            Category::Jacket => "Jaqueta",
            Category::Shoes => "Sapato",
            Category::Accessories => "Acessório",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}
