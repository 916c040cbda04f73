//! Configuration management for tqloot CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Equipment file used when neither `--path` nor a configured default is given
pub const FALLBACK_EQUIPMENT_PATH: &str = "str_lvl_45.yml";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub default_path: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("tqloot");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the user config file, or default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    pub fn set_default_path(&mut self, path: PathBuf) {
        self.default_path = Some(path);
    }

    /// Pick the equipment file: explicit argument, configured default, then fallback
    pub fn equipment_path(&self, provided: Option<PathBuf>) -> PathBuf {
        provided
            .or_else(|| self.default_path.clone())
            .unwrap_or_else(|| PathBuf::from(FALLBACK_EQUIPMENT_PATH))
    }
}
