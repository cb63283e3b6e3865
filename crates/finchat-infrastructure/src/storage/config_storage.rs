//! Application configuration file storage.
//!
//! Loads optional tunables from `config.toml` in the finchat config
//! directory. A missing file yields the defaults; a malformed file is an
//! error, not a silent fallback.

use crate::paths::FinchatPaths;
use finchat_core::config::AppConfig;
use finchat_core::error::{FinchatError, Result};
use std::fs;
use std::path::PathBuf;

/// Storage for the application configuration file (config.toml).
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    /// Creates a new ConfigStorage with the default platform path.
    pub fn new() -> Result<Self> {
        let path = FinchatPaths::config_file()
            .map_err(|e| FinchatError::config_missing(e.to_string()))?;
        Ok(Self { path })
    }

    /// Creates a new ConfigStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration, falling back to defaults when the file is
    /// absent.
    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config = toml::from_str(&content)?;

        Ok(config)
    }
}
