use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clothing::ClothingItem;
use crate::ids::{TryOnId, UserId};

/// Record produced by one completed pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryOnResult {
    pub id: TryOnId,
    pub user_id: UserId,
    pub original_photo_url: String,
    pub clothing_item: ClothingItem,
    pub result_image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent_result_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub liked: bool,
}
