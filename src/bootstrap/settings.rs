//! Runtime settings: the loaded [`AppConfig`] with defaults applied.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ars_core::config::AppConfig;
use ars_core::pipeline::DEFAULT_DETECTION_DELAY;
use ars_core::photo::ValidationPolicy;
use tracing::warn;

pub const DEFAULT_CATALOG_ITEM_ID: &str = "1";

#[derive(Debug, Clone, PartialEq)]
pub struct SessionScript {
    pub photo_path: Option<PathBuf>,
    pub clothing_image_path: Option<PathBuf>,
    pub catalog_item_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeSettings {
    pub time_scale: f64,
    pub detection_delay: Duration,
    pub validation_policy: ValidationPolicy,
    pub gallery_path: PathBuf,
    pub downloads_dir: PathBuf,
    pub log_dir: PathBuf,
    pub session: SessionScript,
}

fn non_empty(path: &Path) -> Option<PathBuf> {
    (!path.as_os_str().is_empty()).then(|| path.to_path_buf())
}

fn parse_policy(raw: &str) -> ValidationPolicy {
    match raw.trim().to_ascii_lowercase().as_str() {
        "standard" => ValidationPolicy::Standard,
        "" | "strict" => ValidationPolicy::Strict,
        other => {
            warn!(policy = other, "unknown validation policy, using strict");
            ValidationPolicy::Strict
        }
    }
}

impl RuntimeSettings {
    /// Fills every missing config fact from defaults rooted in `data_dir`.
    pub fn resolve(config: &AppConfig, data_dir: &Path) -> Self {
        let defaults = AppConfig::with_system_defaults(data_dir.to_path_buf());
        let or_default =
            |configured: &Path, fallback: PathBuf| non_empty(configured).unwrap_or(fallback);

        Self {
            time_scale: config.time_scale.unwrap_or(1.0),
            detection_delay: config
                .detection_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_DETECTION_DELAY),
            validation_policy: parse_policy(&config.validation_policy),
            gallery_path: or_default(&config.gallery_path, defaults.gallery_path),
            downloads_dir: or_default(&config.downloads_dir, defaults.downloads_dir),
            log_dir: or_default(&config.log_dir, defaults.log_dir),
            session: SessionScript {
                photo_path: non_empty(&config.session_photo_path),
                clothing_image_path: non_empty(&config.session_clothing_image_path),
                catalog_item_id: if config.session_catalog_item_id.trim().is_empty() {
                    DEFAULT_CATALOG_ITEM_ID.to_string()
                } else {
                    config.session_catalog_item_id.trim().to_string()
                },
            },
        }
    }
}
