//! Initialize log root use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, LogRepository};
use std::fs;
use std::path::Path;

/// Initialize a new log root at the specified path.
pub fn init(path: &Path, year: Option<String>) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new(year);
    repo.save_config(&config)?;

    // Seed the logs tree so the first day folder has a place to go.
    let logs_root = repo.logs_root(&config);
    if let Some(year) = &config.year {
        fs::create_dir_all(logs_root.join(year))?;
    } else {
        fs::create_dir_all(&logs_root)?;
    }

    println!("Initialized buildlog root at {}", path.display());
    if let Some(year) = &config.year {
        println!("Default year: {}", year);
    }

    Ok(())
}
