//! Week aggregation and display post-processing
//!
//! Entries bucket into week numbers computed from their 0-based day index:
//! days 0-6 are week 1, days 7-13 week 2, and so on.

use crate::domain::entry::LogEntry;
use crate::error::{BuildlogError, Result};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

/// Placeholder substituted with the week number in title templates.
pub const WEEK_NUMBER_VAR: &str = "{WEEK_NUMBER}";

/// Default week title template.
pub const DEFAULT_WEEK_TITLE: &str = "Week {WEEK_NUMBER}";

/// One week's worth of entries, sorted by day ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekData {
    /// Week number the group was bucketed under.
    #[serde(skip)]
    pub week: u32,
    /// Rendered title for display.
    pub title: String,
    /// Member entries, day ascending.
    pub logs: Vec<LogEntry>,
}

/// Compute the week number for a 0-based day index.
pub fn week_number(day: u32) -> u32 {
    day / 7 + 1
}

/// Render a week title from a template.
pub fn week_title(template: &str, week: u32) -> String {
    template.replace(WEEK_NUMBER_VAR, &week.to_string())
}

/// Group entries into weeks ordered by ascending week number.
///
/// Members keep input order between equal days (stable sort).
pub fn organize_by_week(entries: Vec<LogEntry>, title_template: &str) -> Vec<WeekData> {
    let mut buckets: BTreeMap<u32, Vec<LogEntry>> = BTreeMap::new();

    for entry in entries {
        buckets.entry(week_number(entry.day)).or_default().push(entry);
    }

    buckets
        .into_iter()
        .map(|(week, mut logs)| {
            logs.sort_by_key(|log| log.day);
            WeekData {
                week,
                title: week_title(title_template, week),
                logs,
            }
        })
        .collect()
}

/// A display-level instruction to fold one week's entries into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSpec {
    pub from: u32,
    pub into: u32,
}

impl FromStr for MergeSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = || format!("Invalid merge spec: '{}'. Expected FROM:INTO, e.g. 4:3", s);
        let (from, into) = s.split_once(':').ok_or_else(err)?;
        let from: u32 = from.trim().parse().map_err(|_| err())?;
        let into: u32 = into.trim().parse().map_err(|_| err())?;
        if from == into {
            return Err(format!("Merge spec '{}' has identical weeks", s));
        }
        Ok(MergeSpec { from, into })
    }
}

/// Fold the `from` week's entries into the `into` week.
///
/// Entries whose id already exists in the target week are skipped; the
/// source group is removed. A missing source week is a no-op so the same
/// display configuration works for years with fewer weeks, but a missing
/// target week is an error.
pub fn merge_week(mut weeks: Vec<WeekData>, spec: MergeSpec) -> Result<Vec<WeekData>> {
    let Some(from_pos) = weeks.iter().position(|w| w.week == spec.from) else {
        return Ok(weeks);
    };
    let source = weeks.remove(from_pos);

    let target = weeks
        .iter_mut()
        .find(|w| w.week == spec.into)
        .ok_or_else(|| {
            BuildlogError::Merge(format!("No week {} to merge week {} into", spec.into, spec.from))
        })?;

    let existing: HashSet<String> = target.logs.iter().map(|log| log.id.clone()).collect();
    target
        .logs
        .extend(source.logs.into_iter().filter(|log| !existing.contains(&log.id)));

    Ok(weeks)
}
