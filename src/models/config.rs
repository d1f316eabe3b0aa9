//! Configuration model.

use crate::models::media::PreferredKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan configuration.
    pub scan: ScanConfig,
}

/// Scan configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Media kind assumed when the command line does not declare one.
    pub default_media_kind: Option<PreferredKind>,
    /// Extra video extensions recognized in addition to the built-in list.
    pub extra_extensions: Vec<String>,
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("media_renamer")
}

/// Load configuration from file.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&config_path) {
            match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Ignoring malformed config {}: {}", config_path.display(), e);
                }
            }
        }
    }

    Config::default()
}
