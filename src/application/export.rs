//! Website JSON export use case
//!
//! The serialized week list is the contract with the site's presentation
//! layer: camelCase entry fields, weeks in ascending order.

use crate::domain::WeekData;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Serialize weeks to the JSON shape the site consumes.
pub fn export_weeks(weeks: &[WeekData], compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(weeks)?
    } else {
        serde_json::to_string_pretty(weeks)?
    };
    Ok(json)
}

/// Write exported JSON to a file, creating parent directories.
pub fn write_export(json: &str, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::LogEntry;
    use tempfile::TempDir;

    fn sample_weeks() -> Vec<WeekData> {
        vec![WeekData {
            week: 1,
            title: "Week 1".to_string(),
            logs: vec![LogEntry {
                id: "day0_20240110".to_string(),
                day: 0,
                date: "2024-01-10".to_string(),
                author: "Ana".to_string(),
                preview: "first".to_string(),
                full_text: "- first\n- second".to_string(),
                images: vec!["/logs/2024/day0_20240110/images/a.png".to_string()],
                date_value: None,
            }],
        }]
    }

    #[test]
    fn test_export_uses_site_field_names() {
        let json = export_weeks(&sample_weeks(), true).unwrap();

        assert!(json.contains("\"title\":\"Week 1\""));
        assert!(json.contains("\"fullText\":\"- first\\n- second\""));
        assert!(json.contains("\"logs\""));
        // Internal fields stay out of the contract.
        assert!(!json.contains("date_value"));
        assert!(!json.contains("\"week\""));
    }

    #[test]
    fn test_export_pretty_by_default_shape() {
        let json = export_weeks(&sample_weeks(), false).unwrap();
        assert!(json.contains('\n'));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["logs"][0]["day"], 0);
    }

    #[test]
    fn test_write_export_creates_parents() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("data").join("weeks.json");

        write_export("[]", &output).unwrap();

        assert_eq!(fs::read_to_string(output).unwrap(), "[]");
    }
}
