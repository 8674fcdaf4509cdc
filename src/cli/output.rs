//! Output formatting utilities

use crate::domain::{LogEntry, WeekData};

/// Format a list of entries for display
pub fn format_entry_list(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return "No log entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "Day {:<3} {:<12} {:<24} {}\n",
            entry.day, entry.date, entry.id, entry.preview
        ));
    }
    output
}

/// Format the week overview for display
pub fn format_week_overview(weeks: &[WeekData]) -> String {
    if weeks.is_empty() {
        return "No log entries found".to_string();
    }

    let mut output = String::new();
    for week in weeks {
        output.push_str(&format!("{}\n", week.title));
        for entry in &week.logs {
            output.push_str(&format!(
                "  Day {:<3} {:<12} {}\n",
                entry.day, entry.date, entry.id
            ));
        }
        output.push('\n');
    }
    output
}

/// Format a single entry for display
pub fn format_entry(entry: &LogEntry) -> String {
    let mut output = format!(
        "{}\nDay {} | {} | {}\n\n{}\n",
        entry.id, entry.day, entry.date, entry.author, entry.full_text
    );

    if !entry.images.is_empty() {
        output.push_str("\nImages:\n");
        for image in &entry.images {
            output.push_str(&format!("  {}\n", image));
        }
    }

    output
}
