//! # Demo driver
//!
//! Reads a selector, builds the matching member of one of the sample variant sets through its
//! wrapper factory and prints whether the slot is valid together with the rendered member.

pub mod cli;
pub mod config;
mod report;

pub use report::run;

use crate::config::LoggingConfig;
use vfab_logger::{Logger, LoggerError};

const LOG_NAME: &str = "vfab";

/// Installs logging from configuration, with an optional level taken from the command line.
///
/// # Errors
/// Any [`LoggerError`], including an unknown level name.
pub fn init_logging(cfg: &LoggingConfig, level: Option<&str>) -> Result<Logger, LoggerError> {
    let level = Logger::parse_level(level.unwrap_or(&cfg.level))?;
    let builder = Logger::builder().name(LOG_NAME).level(level);

    match &cfg.path {
        Some(directory) => builder.path(directory).json(cfg.json).init(),
        None => builder.init(),
    }
}
