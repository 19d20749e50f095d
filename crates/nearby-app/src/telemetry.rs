// Rust guideline compliant 2026-10-19

//! Tracing subscriber setup for host applications.

use crate::error::{AppError, Result};
use nearby_core::Config;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs a JSON tracing subscriber as the global default.
///
/// Logs go to `log_file` through a non-blocking writer when given, to
/// stdout otherwise. A subscriber that is already installed is left alone.
///
/// # Arguments
///
/// * `level` - Level name (error, warn, info, debug, trace)
/// * `log_file` - Optional file to append logs to
///
/// # Returns
///
/// The writer guard when logging to a file; keep it alive to flush logs.
///
/// # Errors
///
/// Returns an error if the level is unknown or the log file cannot be opened.
pub fn init_tracing(level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(level)?;

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

/// Installs the subscriber at the level named in `config`.
///
/// # Errors
///
/// Same as [`init_tracing`].
pub fn init_tracing_from_config(
    config: &Config,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    init_tracing(&config.log_level, log_file)
}

/// Parses a level name, case-insensitively.
///
/// # Errors
///
/// Returns `Telemetry` for unknown level names.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(AppError::Telemetry(format!("Unknown log level: {}", other))),
    }
}
