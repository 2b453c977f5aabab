//! Configuration management for multilang
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//! fallbacks = true
//! detect_device_locale = true
//!
//! [persistence]
//! active = false
//! path = "~/.local/share/multilang/state.toml"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::localization::CatalogOptions;
use crate::types::LanguageCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nConfig {
    #[serde(default)]
    pub default_locale: LanguageCode,
    #[serde(default = "default_true")]
    pub fallbacks: bool,
    #[serde(default = "default_true")]
    pub detect_device_locale: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PersistenceConfig {
    /// Restore and save application state across restarts
    #[serde(default)]
    pub active: bool,
    /// Snapshot location, defaults to the data directory
    pub path: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: LanguageCode::default(),
            fallbacks: true,
            detect_device_locale: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.persistence.path {
            if path.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "persistence.path".to_string(),
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions {
            default_locale: self.i18n.default_locale.clone(),
            fallbacks: self.i18n.fallbacks,
            detect_device_locale: self.i18n.detect_device_locale,
        }
    }

    /// Resolve where state snapshots live
    pub fn snapshot_path(&self) -> Result<PathBuf> {
        match &self.persistence.path {
            Some(path) => Ok(PathBuf::from(shellexpand::tilde(path).to_string())),
            None => Ok(resolve_data_path()?.join("state.toml")),
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("MULTILANG_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("multilang").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("multilang"))
}
