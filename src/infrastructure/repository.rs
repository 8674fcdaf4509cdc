//! File system repository
//!
//! Read access to the log tree follows a two-tier failure policy: the
//! enumerable listings (years, day folders, images) degrade to an empty
//! list with a logged warning, while the required log.md document fails
//! hard, since no entry can be built without it.

use crate::error::{BuildlogError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Image extensions the site can display.
const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Name of the required markdown document inside each day folder.
pub const LOG_FILENAME: &str = "log.md";

/// Abstract repository for log root operations
pub trait LogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .buildlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .buildlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .buildlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .buildlog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of LogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the log root by walking up from the current directory.
    /// The BUILDLOG_ROOT environment variable takes precedence.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("BUILDLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_buildlog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(BuildlogError::Config(format!(
                    "BUILDLOG_ROOT is set to '{}' but no .buildlog directory found. \
                    Run 'buildlog init' in that directory or unset BUILDLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the log root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_buildlog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(BuildlogError::NotBuildlogDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .buildlog directory
    fn has_buildlog_dir(path: &Path) -> bool {
        path.join(".buildlog").is_dir()
    }
}

impl LogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_buildlog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let buildlog_dir = self.root.join(".buildlog");

        if buildlog_dir.exists() {
            return Err(BuildlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&buildlog_dir)?;
        Ok(())
    }
}

// Log tree operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Absolute path of the logs tree.
    pub fn logs_root(&self, config: &Config) -> PathBuf {
        self.root.join(&config.logs_dir)
    }

    /// Absolute path of one year directory.
    pub fn year_path(&self, config: &Config, year: &str) -> PathBuf {
        self.logs_root(config).join(year)
    }

    /// List year directories under the logs tree, sorted by name.
    ///
    /// Fails soft: a missing or unreadable logs tree yields an empty list.
    pub fn list_years(&self, config: &Config) -> Vec<String> {
        let logs_root = self.logs_root(config);
        let mut years = Vec::new();

        let walker = WalkDir::new(&logs_root).min_depth(1).max_depth(1);
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Error reading logs directory {}: {}", logs_root.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with('.') {
                    years.push(name.to_string());
                }
            }
        }

        years.sort();
        years
    }

    /// The most recent year directory present, by name.
    pub fn latest_year(&self, config: &Config) -> Option<String> {
        self.list_years(config).into_iter().next_back()
    }

    /// List day folders under a year directory, sorted by name.
    ///
    /// Fails soft: a missing year directory or permission error yields an
    /// empty list with a logged warning.
    pub fn list_day_folders(&self, config: &Config, year: &str) -> Vec<String> {
        let year_path = self.year_path(config, year);

        let entries = match fs::read_dir(&year_path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "Error reading logs directory for year {} ({}): {}",
                    year,
                    year_path.display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut folders = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                folders.push(name.to_string());
            }
        }

        folders.sort();
        folders
    }

    /// Check if a day folder exists under a year directory.
    pub fn day_folder_exists(&self, config: &Config, year: &str, folder: &str) -> bool {
        self.year_path(config, year).join(folder).is_dir()
    }

    /// Read the required log.md of a day folder.
    ///
    /// Fails hard: without the document no entry can be constructed, so a
    /// missing or unreadable file propagates to the caller.
    pub fn read_log(&self, config: &Config, year: &str, folder: &str) -> Result<String> {
        let log_path = self.year_path(config, year).join(folder).join(LOG_FILENAME);

        fs::read_to_string(&log_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BuildlogError::MissingLog(log_path)
            } else {
                BuildlogError::Io(e)
            }
        })
    }

    /// List displayable image file names in a day folder, sorted by name.
    ///
    /// Only jpg/jpeg/png files (case-insensitive) are returned. Fails soft:
    /// a missing images subdirectory yields an empty list.
    pub fn list_images(&self, config: &Config, year: &str, folder: &str) -> Vec<String> {
        let images_path = self.year_path(config, year).join(folder).join("images");

        let entries = match fs::read_dir(&images_path) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Error reading images for {}: {}", folder, e);
                }
                return Vec::new();
            }
        };

        let mut images = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let is_image = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| {
                    let ext = ext.to_lowercase();
                    IMAGE_EXTENSIONS.contains(&ext.as_str())
                })
                .unwrap_or(false);
            if !is_image {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                images.push(name.to_string());
            }
        }

        images.sort();
        images
    }
}
