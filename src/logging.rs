//! Logging configuration for buildlog.
//!
//! Soft-failure paths (directory and image listings) report through
//! `tracing::warn!` instead of failing the caller, so the subscriber set up
//! here is what surfaces those degradations to the user.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Suppress all output except errors.
    Quiet,
    /// Normal output level (warnings and above).
    #[default]
    Normal,
    /// Verbose output (debug and above).
    Verbose,
}

impl Verbosity {
    /// Convert verbosity to a tracing level filter.
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Initialize the logging system.
///
/// Called once at startup. The level is controlled by the `verbosity`
/// parameter, with `RUST_LOG` taking precedence when set.
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("buildlog={}", verbosity.to_level_filter());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr),
    );

    // Ignore the error if a subscriber is already installed (tests).
    let _ = subscriber.try_init();
}
