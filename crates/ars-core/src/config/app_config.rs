use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Multiplier applied to every pipeline step delay.
    pub time_scale: Option<f64>,

    /// Simulated category analysis latency.
    pub detection_delay_ms: Option<u64>,

    /// Photo validation policy name, as written.
    pub validation_policy: String,

    /// Gallery file (path info only, no existence check)
    pub gallery_path: PathBuf,

    /// Directory receiving downloaded looks
    pub downloads_dir: PathBuf,

    /// Directory for the log file
    pub log_dir: PathBuf,

    /// Photo used by the scripted session
    pub session_photo_path: PathBuf,

    /// Custom garment used by the scripted session, if any
    pub session_clothing_image_path: PathBuf,

    /// Catalog pick used when no custom garment is configured
    pub session_catalog_item_id: String,
}

fn str_at<'a>(toml_value: &'a toml::Value, section: &str, key: &str) -> Option<&'a str> {
    toml_value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// Must not validate or fill defaults: an empty string is a valid fact.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            time_scale: toml_value
                .get("pipeline")
                .and_then(|p| p.get("time_scale"))
                .and_then(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64))),
            detection_delay_ms: toml_value
                .get("detection")
                .and_then(|d| d.get("delay_ms"))
                .and_then(|v| v.as_integer())
                .map(|ms| ms.max(0) as u64),
            validation_policy: str_at(toml_value, "validation", "policy")
                .unwrap_or("")
                .to_string(),
            gallery_path: PathBuf::from(str_at(toml_value, "storage", "gallery_path").unwrap_or("")),
            downloads_dir: PathBuf::from(
                str_at(toml_value, "storage", "downloads_dir").unwrap_or(""),
            ),
            log_dir: PathBuf::from(str_at(toml_value, "logging", "log_dir").unwrap_or("")),
            session_photo_path: PathBuf::from(
                str_at(toml_value, "session", "photo_path").unwrap_or(""),
            ),
            session_clothing_image_path: PathBuf::from(
                str_at(toml_value, "session", "clothing_image_path").unwrap_or(""),
            ),
            session_catalog_item_id: str_at(toml_value, "session", "catalog_item_id")
                .unwrap_or("")
                .to_string(),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            time_scale: None,
            detection_delay_ms: None,
            validation_policy: String::new(),
            gallery_path: PathBuf::new(),
            downloads_dir: PathBuf::new(),
            log_dir: PathBuf::new(),
            session_photo_path: PathBuf::new(),
            session_clothing_image_path: PathBuf::new(),
            session_catalog_item_id: String::new(),
        }
    }

    /// AppConfig with paths rooted in `data_dir`.
    ///
    /// The base directory is computed by the caller (e.g. with `dirs`).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            gallery_path: data_dir.join("gallery.json"),
            downloads_dir: data_dir.join("downloads"),
            log_dir: data_dir.join("logs"),
            ..Self::empty()
        }
    }
}
