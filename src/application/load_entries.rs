//! Entry loading use case
//!
//! Mirrors the ingestion pipeline: list day folders, read and split each
//! log.md, derive day/date/preview from conventions, and attach image
//! paths the way the site references them.

use crate::domain::entry::{self, LogEntry, UNKNOWN_AUTHOR};
use crate::domain::front_matter;
use crate::error::{BuildlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository};
use chrono::NaiveDate;

/// Resolve the year to operate on: explicit flag, then the configured
/// default, then the latest year directory on disk.
pub fn resolve_year(
    repository: &FileSystemRepository,
    config: &Config,
    year_flag: Option<String>,
) -> Result<String> {
    if let Some(year) = year_flag {
        return Ok(year);
    }
    if let Some(year) = &config.year {
        return Ok(year.clone());
    }
    repository.latest_year(config).ok_or_else(|| {
        BuildlogError::YearNotFound(format!(
            "no year directories under {}",
            repository.logs_root(config).display()
        ))
    })
}

/// Load a single day folder into a LogEntry.
///
/// Fails when log.md is missing or unreadable; the image listing degrades
/// to empty on its own.
pub fn load_entry(
    repository: &FileSystemRepository,
    config: &Config,
    year: &str,
    folder: &str,
) -> Result<LogEntry> {
    let content = repository.read_log(config, year, folder)?;
    let document = front_matter::parse(&content);

    let images = repository
        .list_images(config, year, folder)
        .into_iter()
        .map(|file| {
            format!(
                "{}/{}/{}/images/{}",
                config.public_prefix.trim_end_matches('/'),
                year,
                folder,
                file
            )
        })
        .collect();

    Ok(LogEntry {
        id: folder.to_string(),
        day: entry::day_number(folder),
        date: entry::display_date(folder),
        author: document
            .author()
            .unwrap_or(UNKNOWN_AUTHOR)
            .to_string(),
        preview: entry::preview(&document.body),
        full_text: document.body,
        images,
        date_value: entry::date_value(folder),
    })
}

/// Load every day folder of a year, sorted by day ascending.
pub fn load_entries(
    repository: &FileSystemRepository,
    config: &Config,
    year: &str,
) -> Result<Vec<LogEntry>> {
    let mut entries = repository
        .list_day_folders(config, year)
        .iter()
        .map(|folder| load_entry(repository, config, year, folder))
        .collect::<Result<Vec<_>>>()?;

    entries.sort_by_key(|entry| entry.day);
    Ok(entries)
}

/// Load entries with optional date range and limit.
///
/// Entries whose folder name doesn't parse to a calendar date are kept by
/// the range filters.
pub fn list_entries(
    repository: &FileSystemRepository,
    config: &Config,
    year: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
) -> Result<Vec<LogEntry>> {
    let mut entries = load_entries(repository, config, year)?;

    if let Some(from_date) = from {
        entries.retain(|e| e.date_value.is_none_or(|d| d >= from_date));
    }
    if let Some(to_date) = to {
        entries.retain(|e| e.date_value.is_none_or(|d| d <= to_date));
    }

    if let Some(n) = limit {
        entries.truncate(n);
    }

    Ok(entries)
}
