//! Mock virtual try-on processing.
//!
//! Walks the scripted step table, reporting progress and sleeping between
//! steps, then fabricates a result pointing at a stock image. No image is
//! ever inspected.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::sleep;
use tracing::{debug, info};

use ars_core::clothing::ClothingItem;
use ars_core::ids::{TryOnId, UserId};
use ars_core::photo::ImageHandle;
use ars_core::pipeline::{transparent_variant, ProcessingStep, PROCESSING_STEPS, STOCK_RESULT_IMAGES};
use ars_core::ports::{ClockPort, PhotoUrlPort, ProgressPort, RandomPort};
use ars_core::tryon::{ProcessingStatus, TryOnResult};

/// Upper bound on the delay multiplier.
const MAX_TIME_SCALE: f64 = 100.0;

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("photo could not be dereferenced: {0}")]
    PhotoUnavailable(#[source] anyhow::Error),
}

/// Use case simulating AI try-on processing.
pub struct ProcessVirtualTryOn {
    photo_urls: Arc<dyn PhotoUrlPort>,
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
    steps: Vec<ProcessingStep>,
    time_scale: f64,
}

impl ProcessVirtualTryOn {
    pub fn new(
        photo_urls: Arc<dyn PhotoUrlPort>,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            photo_urls,
            random,
            clock,
            steps: PROCESSING_STEPS.to_vec(),
            time_scale: 1.0,
        }
    }

    /// Scales every step delay. `0` runs the script without waiting;
    /// negative or non-finite values are treated as `0`.
    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = if time_scale.is_finite() && time_scale > 0.0 {
            time_scale.min(MAX_TIME_SCALE)
        } else {
            0.0
        };
        self
    }

    /// Total time a run spends sleeping.
    pub fn expected_duration(&self) -> Duration {
        self.steps
            .iter()
            .map(|step| self.scaled(step.delay))
            .sum()
    }

    fn scaled(&self, delay: Duration) -> Duration {
        delay.mul_f64(self.time_scale)
    }

    /// Runs the scripted pipeline to completion.
    ///
    /// Reports one `processing` status per step, then a final `completed`
    /// status. The last step already reports 100, so the `completed` report
    /// repeats it: progress never decreases but is not strictly increasing.
    ///
    /// There is no cancellation: callers that lost interest simply drop the
    /// returned result.
    #[tracing::instrument(
        name = "usecase.process_virtual_try_on.run",
        skip_all,
        fields(clothing_id = %clothing.id, category = %clothing.category)
    )]
    pub async fn run(
        &self,
        photo: &ImageHandle,
        clothing: ClothingItem,
        progress: &dyn ProgressPort,
    ) -> Result<TryOnResult, ProcessingError> {
        let original_photo_url = self
            .photo_urls
            .object_url(photo)
            .map_err(ProcessingError::PhotoUnavailable)?;

        for step in &self.steps {
            progress
                .report(ProcessingStatus::processing(step.progress, step.message))
                .await;
            let delay = self.scaled(step.delay);
            if !delay.is_zero() {
                sleep(delay).await;
            }
            debug!(progress = step.progress, "processing step finished");
        }

        let pick = self.random.index(STOCK_RESULT_IMAGES.len()).min(STOCK_RESULT_IMAGES.len() - 1);
        let result_image_url = STOCK_RESULT_IMAGES[pick].to_string();
        let created_at = DateTime::<Utc>::from_timestamp_millis(self.clock.now_ms())
            .unwrap_or_else(Utc::now);

        let result = TryOnResult {
            id: TryOnId::generate(),
            user_id: UserId::placeholder(),
            original_photo_url,
            clothing_item: clothing,
            transparent_result_url: Some(transparent_variant(&result_image_url)),
            result_image_url,
            created_at,
            liked: false,
        };

        progress.report(ProcessingStatus::completed()).await;
        info!(result_id = %result.id, "virtual try-on finished");
        Ok(result)
    }
}
