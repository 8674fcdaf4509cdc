//! Week aggregation use case

use crate::domain::week::{self, MergeSpec, WeekData};
use crate::domain::LogEntry;
use crate::error::Result;
use crate::infrastructure::Config;

/// Group entries into weeks, applying the optional display merge.
///
/// The merge is a post-processing step on the aggregated output; the
/// aggregation itself never combines weeks.
pub fn organize_weeks(
    entries: Vec<LogEntry>,
    config: &Config,
    merge: Option<MergeSpec>,
) -> Result<Vec<WeekData>> {
    let weeks = week::organize_by_week(entries, &config.week_title);

    match merge {
        Some(spec) => week::merge_week(weeks, spec),
        None => Ok(weeks),
    }
}
