//! TOML-based application configuration.
//!
//! Stores the prediction service settings. Configuration lives at
//! `~/.config/mindease/config.toml`; set `MINDEASE_ENV=dev` to use
//! `~/.config/mindease-dev/` instead.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Prediction service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Bound on the prediction call; the source had none.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// One retry on connect/timeout failures.
    #[serde(default = "default_true")]
    pub retry_on_network_error: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/mindease/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub insight: InsightConfig,
}

fn default_endpoint() -> String {
    "http://localhost:5000/predict".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_true() -> bool {
    true
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            retry_on_network_error: true,
        }
    }
}

/// Returns `~/.config/mindease[-dev]/` based on MINDEASE_ENV.
///
/// # Errors
///
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MINDEASE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("mindease-dev")
    } else {
        base_dir.join("mindease")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

impl Config {
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Load from disk, returning the default on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.insight.endpoint, "http://localhost:5000/predict");
        assert_eq!(parsed.insight.timeout_secs, 10);
        assert!(parsed.insight.retry_on_network_error);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("[insight]\nendpoint = \"http://box:9000/p\"\n").unwrap();
        assert_eq!(parsed.insight.endpoint, "http://box:9000/p");
        assert_eq!(parsed.insight.timeout_secs, 10);
    }

    #[test]
    fn load_writes_default_when_absent_then_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let first = Config::load_from(&path).unwrap();
        assert_eq!(first.insight.timeout_secs, 10);
        assert!(path.exists());

        let mut edited = first;
        edited.insight.timeout_secs = 3;
        edited.save_to(&path).unwrap();

        let second = Config::load_from(&path).unwrap();
        assert_eq!(second.insight.timeout_secs, 3);
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not toml at all [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
