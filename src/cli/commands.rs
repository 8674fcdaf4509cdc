//! CLI command definitions

use crate::domain::MergeSpec;
use crate::error::{BuildlogError, Result};
use crate::logging::Verbosity;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "buildlog")]
#[command(about = "Build log ingestion and aggregation for the club website", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Suppress warnings from degraded listings
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Logging verbosity derived from the global flags.
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new log root
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Default year to configure and seed (e.g., 2024)
        #[arg(long)]
        year: Option<String>,
    },

    /// List log entries sorted by day
    List {
        /// Year directory to read (default: configured or latest year)
        #[arg(long)]
        year: Option<String>,

        /// Only entries dated on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only entries dated on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Maximum number of entries to show
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show entries grouped into weeks
    Weeks {
        /// Year directory to read (default: configured or latest year)
        #[arg(long)]
        year: Option<String>,

        /// Fold one week into another for display (e.g., 4:3)
        #[arg(long, value_name = "FROM:INTO")]
        merge: Option<MergeSpec>,
    },

    /// Show a single day folder
    Show {
        /// Day folder name (e.g., day5_20240115)
        folder: String,

        /// Year directory to read (default: configured or latest year)
        #[arg(long)]
        year: Option<String>,

        /// Render the markdown body to HTML
        #[arg(long)]
        html: bool,
    },

    /// Export the aggregated weeks as JSON for the website
    Export {
        /// Year directory to read (default: configured or latest year)
        #[arg(long)]
        year: Option<String>,

        /// Fold one week into another for display (e.g., 4:3)
        #[arg(long, value_name = "FROM:INTO")]
        merge: Option<MergeSpec>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Parse a `--from`/`--to` value.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| BuildlogError::Config(format!("Invalid date value: '{}'", value)))
}
