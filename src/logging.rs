use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "zomato-insights.log";
/// Directory under the system temp dir used when the preferred one is unusable.
const FALLBACK_DIR_NAME: &str = "zomato-insights";

/// Route `tracing` output to a file in `log_dir`. The terminal belongs to the
/// UI, so nothing is written to stdout. Keep the returned guard alive until
/// shutdown or buffered lines are lost.
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    let (dir, preferred_error) = resolve_log_dir(log_dir)?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // A subscriber installed earlier in the process keeps receiving events.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(non_blocking)
        .try_init();

    if let Some(err) = preferred_error {
        warn!(
            preferred = %log_dir.display(),
            fallback = %dir.display(),
            error = %err,
            "log directory unusable, using fallback"
        );
    }

    Ok(guard)
}

/// Directory the log file goes into: `preferred` when it can be created,
/// otherwise a folder under the system temp dir. The second element carries
/// the reason `preferred` was skipped.
pub(crate) fn resolve_log_dir(preferred: &Path) -> Result<(PathBuf, Option<String>)> {
    match fs::create_dir_all(preferred) {
        Ok(()) => Ok((preferred.to_path_buf(), None)),
        Err(err) => {
            let fallback = env::temp_dir().join(FALLBACK_DIR_NAME);
            fs::create_dir_all(&fallback).context("failed to create log directory")?;
            Ok((fallback, Some(err.to_string())))
        }
    }
}
