//! buildlog - Build log ingestion and aggregation
//!
//! Ingests a tree of dated day folders (markdown text plus images), derives
//! entry metadata from folder-naming conventions, and aggregates entries
//! into week groups that the club website consumes as JSON.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::BuildlogError;
pub use logging::init_logging;
