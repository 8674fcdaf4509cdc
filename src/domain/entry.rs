//! Log entry model and day-folder naming convention
//!
//! Day folders encode their metadata in the folder name: `day5_20240115`
//! carries day index 5 and the date 2024-01-15. The convention is forgiving
//! on purpose: names that don't conform still produce an entry, with day 0
//! and an "Unknown Date" placeholder, so a misnamed folder degrades the
//! display instead of breaking the site build.

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Placeholder date for folder names without an 8-digit date run.
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Author used when the metadata header has no author field.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Preview used when the body has no bullet line.
pub const NO_PREVIEW: &str = "No preview available";

/// Regex for the day index: first digit run after a literal "day" prefix.
fn day_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)day(\d+)").unwrap())
}

/// Regex for the encoded date: first run of 8 digits anywhere in the name.
fn date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(\d{8})").unwrap())
}

/// One parsed day-folder, immutable once constructed.
///
/// Serializes with the camelCase field names the website consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Folder name, used as the entry identifier.
    pub id: String,
    /// Day index derived from the folder name (0 when absent).
    pub day: u32,
    /// Display date derived from the folder name digits, never validated.
    pub date: String,
    /// Author from the metadata header.
    pub author: String,
    /// First bullet line of the body.
    pub preview: String,
    /// Raw markdown body with the metadata header stripped.
    pub full_text: String,
    /// Site-relative image paths, in listing order.
    pub images: Vec<String>,
    /// The 8-digit run parsed as a calendar date, when it is one.
    /// Only used for date-range filtering; absent from the export shape.
    #[serde(skip)]
    pub date_value: Option<NaiveDate>,
}

/// Extract the day index from a folder name.
///
/// Returns 0 when the name has no `day<digits>` segment or the digits don't
/// fit a u32.
pub fn day_number(folder: &str) -> u32 {
    day_regex()
        .captures(folder)
        .and_then(|cap| cap[1].parse().ok())
        .unwrap_or(0)
}

/// Format the first 8-digit run of a folder name as `YYYY-MM-DD`.
///
/// The digits are rearranged, not validated: `day1_99999999` yields
/// `9999-99-99`. Names without such a run yield [`UNKNOWN_DATE`].
pub fn display_date(folder: &str) -> String {
    match date_regex().captures(folder) {
        Some(cap) => {
            let digits = &cap[1];
            format!("{}-{}-{}", &digits[0..4], &digits[4..6], &digits[6..8])
        }
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Parse the first 8-digit run of a folder name as a calendar date.
pub fn date_value(folder: &str) -> Option<NaiveDate> {
    let cap = date_regex().captures(folder)?;
    NaiveDate::parse_from_str(&cap[1], "%Y%m%d").ok()
}

/// Derive the preview line from a markdown body.
///
/// The preview is the first line that, after trimming, starts with `-`,
/// with the marker and its trailing whitespace removed.
pub fn preview(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .find(|line| line.starts_with('-'))
        .map(|line| line[1..].trim_start().to_string())
        .unwrap_or_else(|| NO_PREVIEW.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_number_from_conventional_name() {
        assert_eq!(day_number("day5_20240115"), 5);
        assert_eq!(day_number("day12_20240122"), 12);
    }

    #[test]
    fn test_day_number_case_insensitive() {
        assert_eq!(day_number("Day7_20240117"), 7);
        assert_eq!(day_number("DAY3"), 3);
    }

    #[test]
    fn test_day_number_defaults_to_zero() {
        assert_eq!(day_number("kickoff"), 0);
        assert_eq!(day_number("20240115"), 0);
        assert_eq!(day_number("day_one"), 0);
    }

    #[test]
    fn test_day_number_overflow_defaults_to_zero() {
        assert_eq!(day_number("day99999999999999999999"), 0);
    }

    #[test]
    fn test_display_date_from_digits() {
        assert_eq!(display_date("day5_20240115"), "2024-01-15");
        assert_eq!(display_date("20241231_final"), "2024-12-31");
    }

    #[test]
    fn test_display_date_is_not_validated() {
        // Rearranged digits, even when they are not a real date.
        assert_eq!(display_date("day1_99999999"), "9999-99-99");
    }

    #[test]
    fn test_display_date_takes_first_eight_of_longer_run() {
        assert_eq!(display_date("day1_2024011599"), "2024-01-15");
    }

    #[test]
    fn test_display_date_unknown_without_run() {
        assert_eq!(display_date("kickoff"), UNKNOWN_DATE);
        assert_eq!(display_date("day5_2024"), UNKNOWN_DATE);
    }

    #[test]
    fn test_date_value_parses_real_dates_only() {
        assert_eq!(
            date_value("day5_20240115"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(date_value("day1_99999999"), None);
        assert_eq!(date_value("kickoff"), None);
    }

    #[test]
    fn test_preview_first_bullet() {
        let body = "Intro paragraph\n- first point\n- second point\n";
        assert_eq!(preview(body), "first point");
    }

    #[test]
    fn test_preview_trims_indented_bullets() {
        let body = "Heading\n  -   indented point\n";
        assert_eq!(preview(body), "indented point");
    }

    #[test]
    fn test_preview_fallback_without_bullets() {
        let body = "Just prose.\nNo list here.\n";
        assert_eq!(preview(body), NO_PREVIEW);
    }

    #[test]
    fn test_preview_empty_body() {
        assert_eq!(preview(""), NO_PREVIEW);
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = LogEntry {
            id: "day5_20240115".to_string(),
            day: 5,
            date: "2024-01-15".to_string(),
            author: "Ana".to_string(),
            preview: "first point".to_string(),
            full_text: "- first point".to_string(),
            images: vec!["/logs/2024/day5_20240115/images/a.png".to_string()],
            date_value: NaiveDate::from_ymd_opt(2024, 1, 15),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"fullText\""));
        assert!(!json.contains("date_value"));
    }
}
