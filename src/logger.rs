//! Logging setup
//!
//! The crate logs through the `log` facade only. Applications that want to
//! see those records without wiring their own logger can call [`init`] with
//! the `[logging]` section of their [`crate::config::Config`].

use crate::config::LoggingConfig;
use crate::constants::LOG_TIMESTAMP_FORMAT;
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;

/// Install a global `fern` logger as described by `config`.
///
/// Returns `Ok(false)` without touching the global logger when logging is
/// disabled. Fails if the level is unknown, the log file cannot be opened,
/// or a global logger is already installed.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    let level = level_filter(&config.level)?;
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    let dispatch = match &config.file {
        Some(path) => {
            let file = fern::log_file(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch.apply().context("A global logger is already installed")?;
    log::debug!("Logging initialised at level {level}");
    Ok(true)
}

/// Parse a configured level name (case-insensitive).
pub fn level_filter(level: &str) -> Result<LevelFilter> {
    level
        .trim()
        .parse::<LevelFilter>()
        .with_context(|| format!("Invalid logging level '{}'", level))
}
