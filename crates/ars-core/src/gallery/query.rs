use serde::{Deserialize, Serialize};

use super::GalleryItem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryFilter {
    #[default]
    All,
    Favorites,
}

/// Search and filter applied when listing the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryQuery {
    pub search: String,
    pub filter: GalleryFilter,
}

impl GalleryQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            filter: GalleryFilter::All,
        }
    }

    pub fn favorites() -> Self {
        Self {
            search: String::new(),
            filter: GalleryFilter::Favorites,
        }
    }

    /// Case-insensitive match on the clothing name or any tag, then the filter.
    pub fn matches(&self, item: &GalleryItem) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = item.result.clothing_item.name.to_lowercase().contains(&term)
            || item.tags.iter().any(|tag| tag.to_lowercase().contains(&term));
        let matches_filter = match self.filter {
            GalleryFilter::All => true,
            GalleryFilter::Favorites => item.liked(),
        };
        matches_search && matches_filter
    }
}
