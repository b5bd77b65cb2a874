//! Logging setup
//!
//! The crate logs through the `log` facade. Host applications that have no
//! logger of their own can call [`init`] to route records to a file.

use crate::config::LoggingConfig;
use crate::constants::{CONFIG_DIR_NAME, LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Install a file logger according to `config`
///
/// Returns `false` without touching the global logger when logging is
/// disabled. Fails if another logger is already installed.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    let path = log_file_path()?;
    dispatch(config, &path)?.apply().context("Failed to install logger")?;

    log::debug!("Logging to {}", path.display());
    Ok(true)
}

/// Build the dispatcher writing `[timestamp level target] message` lines to `path`
///
/// Creates the parent directory and opens the file in append mode.
pub fn dispatch(config: &LoggingConfig, path: &Path) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file))
}

/// Location of the log file under the user data directory
pub fn log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
}
