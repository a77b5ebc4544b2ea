//! # Configuration Loader
//!
//! Reads a TOML file into the [`AppConfig`] DTO. Pure data loading: no
//! validation and no defaults, whatever is in the file is a fact.

use anyhow::Context;
use ars_core::config::AppConfig;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "ARSTYLE_CONFIG";

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Config file to load: `$ARSTYLE_CONFIG` when set, else `config.toml` in
/// `data_dir` when it exists.
pub fn config_path(env_value: Option<String>, data_dir: &Path) -> Option<PathBuf> {
    match env_value.filter(|value| !value.trim().is_empty()) {
        Some(value) => Some(PathBuf::from(value)),
        None => {
            let candidate = data_dir.join(DEFAULT_CONFIG_FILE);
            candidate.is_file().then_some(candidate)
        }
    }
}
