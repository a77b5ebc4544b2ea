use serde::{Deserialize, Serialize};

use crate::ids::TryOnId;
use crate::tryon::TryOnResult;

/// Tags attached to every freshly saved look.
pub const DEFAULT_TAGS: [&str; 2] = ["novo", "ia-gerado"];

/// A try-on result promoted into the session gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(flatten)]
    pub result: TryOnResult,
    pub tags: Vec<String>,
    pub is_public: bool,
}

impl GalleryItem {
    pub fn from_result(result: TryOnResult) -> Self {
        Self {
            result,
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
            is_public: false,
        }
    }

    pub fn id(&self) -> &TryOnId {
        &self.result.id
    }

    pub fn liked(&self) -> bool {
        self.result.liked
    }
}
