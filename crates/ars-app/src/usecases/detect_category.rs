use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use ars_core::clothing::Category;
use ars_core::photo::ImageHandle;
use ars_core::pipeline::{category_from_file_name, weighted_category, DEFAULT_DETECTION_DELAY};
use ars_core::ports::RandomPort;

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("clothing image is empty")]
    EmptyImage,
    #[error("not an image: {mime_type}")]
    NotAnImage { mime_type: String },
}

/// Use case guessing the category of an uploaded garment.
///
/// A keyword in the file name decides; otherwise a weighted draw does.
pub struct DetectClothingCategory {
    random: Arc<dyn RandomPort>,
    delay: Duration,
}

impl DetectClothingCategory {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self {
            random,
            delay: DEFAULT_DETECTION_DELAY,
        }
    }

    /// Simulated analysis latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[tracing::instrument(
        name = "usecase.detect_clothing_category.execute",
        skip_all,
        fields(file_name = %image.file_name)
    )]
    pub async fn execute(&self, image: &ImageHandle) -> Result<Category, DetectionError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        if image.size_bytes == 0 {
            return Err(DetectionError::EmptyImage);
        }
        if !image.mime_type.to_ascii_lowercase().starts_with("image/") {
            return Err(DetectionError::NotAnImage {
                mime_type: image.mime_type.clone(),
            });
        }

        if let Some(category) = category_from_file_name(&image.file_name) {
            debug!(%category, "category taken from file name");
            return Ok(category);
        }

        let draw = self.random.percent();
        let category = weighted_category(draw);
        debug!(%category, draw, "category drawn from weights");
        Ok(category)
    }
}
