//! Show single entry use case

use crate::application::load_entries::load_entry;
use crate::domain::LogEntry;
use crate::error::{BuildlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository};
use pulldown_cmark::{html, Parser as MdParser};

/// Load one day folder by name.
pub fn show_entry(
    repository: &FileSystemRepository,
    config: &Config,
    year: &str,
    folder: &str,
) -> Result<LogEntry> {
    if !repository.day_folder_exists(config, year, folder) {
        return Err(BuildlogError::EntryNotFound(folder.to_string()));
    }

    load_entry(repository, config, year, folder)
}

/// Render a markdown body to HTML, the way the site embeds expanded entries.
pub fn render_html(markdown: &str) -> String {
    let parser = MdParser::new(markdown);
    let mut html_out = String::new();
    html::push_html(&mut html_out, parser);
    html_out
}
