//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{parse_date, Cli, Commands};
pub use output::{format_entry, format_entry_list, format_week_overview};
