// src/config.rs
//
// Client configuration, stored as JSON under the platform config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

const APP_DIR: &str = "bangumi-client";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root of the REST API, e.g. `http://localhost:8080/api`.
    pub api_base_url: String,
    /// Server root used to build stream URLs for external players.
    pub origin: String,
    pub timeout_secs: u64,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            origin: "http://localhost:8080".to_string(),
            timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Config from the default location, or the defaults when there is none.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            Ok(_) | Err(ConfigError::NoConfigDir) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
