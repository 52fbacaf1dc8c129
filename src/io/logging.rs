use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::model::config::LogConfig;

/// Environment variable that overrides the configured log filter
pub const LOG_ENV: &str = "TASKDECK_LOG";

/// Error type for log setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid log filter {filter:?}: {source}")]
    FilterError {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("a global logger is already installed")]
    AlreadyInstalled,
}

/// Build the filter: `TASKDECK_LOG` if set, else the configured level.
pub fn build_filter(config: &LogConfig, env_value: Option<&str>) -> Result<EnvFilter, LogError> {
    let filter = env_value.unwrap_or(&config.level).to_string();
    EnvFilter::try_new(&filter).map_err(|source| LogError::FilterError { filter, source })
}

fn open_log_file(path: &Path) -> Result<File, LogError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::OpenError {
            path: path.to_path_buf(),
            source,
        })
}

/// Install a file-backed subscriber.
///
/// The terminal belongs to the TUI, so logs only ever go to a file. With
/// no file configured this does nothing and returns `Ok(false)`.
pub fn init_logging(config: &LogConfig, file_override: Option<&Path>) -> Result<bool, LogError> {
    let Some(path) = file_override.or(config.file.as_deref()) else {
        return Ok(false);
    };
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = build_filter(config, env_value.as_deref())?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|_| LogError::AlreadyInstalled)?;
    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}
