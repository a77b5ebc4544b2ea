//! # Configuration data
//!
//! Data transfer objects only. This module maps TOML into [`AppConfig`]
//! and does nothing else: no validation, no policy, no default value
//! calculation. Missing entries become empty values or `None`; the
//! bootstrap decides what they mean.

mod app_config;

pub use app_config::AppConfig;
