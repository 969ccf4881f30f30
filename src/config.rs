//! Application configuration.
//!
//! Loaded from a TOML file in the platform config directory. A missing
//! file is not an error: defaults are used and the file is created on
//! first run. CLI flags override file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Path of the JSONL analytics event log. When unset, events go to
    /// the tracing log instead.
    pub event_log: Option<PathBuf>,

    /// Theme name: "dark", "light", or "nocolor".
    pub theme: Option<String>,
}

impl Config {
    /// Default config file location:
    /// `<platform config dir>/screenflow/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("screenflow")
            .join("config.toml")
    }

    /// Load the config, creating it with defaults when missing.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {:?}", path))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {:?}", path))?;
            debug!(path = ?path, "loaded config");
            Ok(config)
        } else {
            let config = Config::default();
            config.save(path)?;
            debug!(path = ?path, "created default config");
            Ok(config)
        }
    }

    /// Write the config to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {:?}", path))?;
        Ok(())
    }
}
