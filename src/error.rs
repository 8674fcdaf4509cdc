//! Error types for buildlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the buildlog application
#[derive(Debug, Error)]
pub enum BuildlogError {
    #[error("Not a buildlog directory: {0}")]
    NotBuildlogDirectory(PathBuf),

    #[error("No year to operate on: {0}")]
    YearNotFound(String),

    #[error("Log entry not found: {0}")]
    EntryNotFound(String),

    #[error("Missing log.md: {0}")]
    MissingLog(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Merge error: {0}")]
    Merge(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BuildlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildlogError::NotBuildlogDirectory(_) => 2,
            BuildlogError::YearNotFound(_) => 3,
            BuildlogError::EntryNotFound(_) | BuildlogError::MissingLog(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BuildlogError::NotBuildlogDirectory(path) => {
                format!(
                    "Not a buildlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'buildlog init' in this directory to create a new log root\n\
                    • Navigate to an existing buildlog directory\n\
                    • Set BUILDLOG_ROOT environment variable to your log root path",
                    path.display()
                )
            }
            BuildlogError::YearNotFound(msg) => {
                format!(
                    "No year to operate on: {}\n\n\
                    Suggestions:\n\
                    • Pass a year explicitly: buildlog list --year 2024\n\
                    • Set a default: buildlog config year 2024\n\
                    • Create a year directory under your logs tree (e.g., logs/2024)",
                    msg
                )
            }
            BuildlogError::EntryNotFound(folder) => {
                format!(
                    "Log entry not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'buildlog list' to see available day folders\n\
                    • Check the year: buildlog show {} --year <YEAR>",
                    folder, folder
                )
            }
            BuildlogError::MissingLog(path) => {
                format!(
                    "Missing log.md: {}\n\n\
                    Every day folder must contain a log.md document.\n\
                    Suggestions:\n\
                    • Create the file with a metadata header and a bulleted body\n\
                    • Remove the day folder if it was created by mistake",
                    path.display()
                )
            }
            BuildlogError::Config(msg) => {
                if msg.contains("date") {
                    format!(
                        "{}\n\n\
                        Expected format: YYYY-MM-DD\n\
                        Example: buildlog list --from 2024-01-15 --to 2024-01-31",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            BuildlogError::Merge(msg) => {
                format!(
                    "{}\n\n\
                    Merge specs look like FROM:INTO, e.g. --merge 4:3\n\
                    Both sides are week numbers from the aggregated output.",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BuildlogError
pub type Result<T> = std::result::Result<T, BuildlogError>;
