//! Configuration management

use crate::domain::week::DEFAULT_WEEK_TITLE;
use crate::error::{BuildlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_logs_dir() -> String {
    "logs".to_string()
}

fn default_week_title() -> String {
    DEFAULT_WEEK_TITLE.to_string()
}

fn default_public_prefix() -> String {
    "/logs".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the logs tree, relative to the root.
    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,
    /// Default year for commands that don't pass one.
    #[serde(default)]
    pub year: Option<String>,
    /// Week title template; `{WEEK_NUMBER}` is substituted.
    #[serde(default = "default_week_title")]
    pub week_title: String,
    /// URL prefix under which the site serves the logs tree.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(year: Option<String>) -> Self {
        Config {
            logs_dir: default_logs_dir(),
            year,
            week_title: default_week_title(),
            public_prefix: default_public_prefix(),
            created: Utc::now(),
        }
    }

    /// Load config from .buildlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".buildlog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BuildlogError::NotBuildlogDirectory(path.to_path_buf())
            } else {
                BuildlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| BuildlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .buildlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let buildlog_dir = path.join(".buildlog");
        let config_path = buildlog_dir.join("config.toml");

        if !buildlog_dir.exists() {
            fs::create_dir(&buildlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| BuildlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
