//! Application layer - Use cases and orchestration

pub mod export;
pub mod init;
pub mod load_entries;
pub mod manage_config;
pub mod organize_weeks;
pub mod show_entry;

pub use export::{export_weeks, write_export};
pub use init::init;
pub use load_entries::{list_entries, load_entries, resolve_year};
pub use manage_config::ConfigService;
pub use organize_weeks::organize_weeks;
pub use show_entry::{render_html, show_entry};
