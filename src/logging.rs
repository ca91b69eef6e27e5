//! Tracing subscriber initialization
//!
//! The terminal is in raw mode while the viewer runs, so log output goes
//! to a file. Follow it with `tail -f ~/.zzlogview.log`.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, ViewerError};

/// Initialize file-based logging.
///
/// Respects RUST_LOG, defaulting to "info". Creates the parent directory
/// of `log_path` if it is missing.
pub fn init(log_path: &Path) -> Result<()> {
    let directory = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory)?;

    let file_name = log_path
        .file_name()
        .ok_or_else(|| ViewerError::Logging(format!("invalid log file path: {:?}", log_path)))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| ViewerError::Logging(e.to_string()))
}
