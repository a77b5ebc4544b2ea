use serde::{Deserialize, Serialize};

use super::{GalleryItem, GalleryQuery};
use crate::ids::TryOnId;
use crate::tryon::TryOnResult;

/// Saved looks, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallery(Vec<GalleryItem>);

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self(items)
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &TryOnId) -> bool {
        self.0.iter().any(|item| item.id() == id)
    }

    /// Wraps `result` and inserts it at the head.
    ///
    /// Returns `false` when a look with the same id is already saved.
    pub fn save(&mut self, result: TryOnResult) -> bool {
        if self.contains(&result.id) {
            return false;
        }
        self.0.insert(0, GalleryItem::from_result(result));
        true
    }

    /// Removes the look with `id`; returns whether anything was removed.
    pub fn delete(&mut self, id: &TryOnId) -> bool {
        let before = self.0.len();
        self.0.retain(|item| item.id() != id);
        self.0.len() != before
    }

    /// Flips the liked flag of the look with `id`, returning the new value.
    pub fn toggle_like(&mut self, id: &TryOnId) -> Option<bool> {
        let item = self.0.iter_mut().find(|item| item.id() == id)?;
        item.result.liked = !item.result.liked;
        Some(item.result.liked)
    }

    pub fn set_liked(&mut self, id: &TryOnId, liked: bool) -> bool {
        match self.0.iter_mut().find(|item| item.id() == id) {
            Some(item) if item.result.liked != liked => {
                item.result.liked = liked;
                true
            }
            _ => false,
        }
    }

    pub fn query(&self, query: &GalleryQuery) -> Vec<GalleryItem> {
        self.0
            .iter()
            .filter(|item| query.matches(item))
            .cloned()
            .collect()
    }
}

impl From<Vec<GalleryItem>> for Gallery {
    fn from(items: Vec<GalleryItem>) -> Self {
        Self(items)
    }
}
