//! Config management use case

use crate::error::{BuildlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, LogRepository};

/// Service for managing log root configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "logs_dir" => Ok(config.logs_dir),
            "year" => Ok(config.year.unwrap_or_default()),
            "week_title" => Ok(config.week_title),
            "public_prefix" => Ok(config.public_prefix),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(BuildlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: logs_dir, year, week_title, public_prefix, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "logs_dir" => {
                config.logs_dir = value.to_string();
            }
            "year" => {
                config.year = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "week_title" => {
                config.week_title = value.to_string();
            }
            "public_prefix" => {
                config.public_prefix = value.to_string();
            }
            "created" => {
                return Err(BuildlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(BuildlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: logs_dir, year, week_title, public_prefix",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
