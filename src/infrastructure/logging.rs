use crate::core::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tauri::Manager;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{Builder as RollingBuilder, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_LEVEL: &str = "info";
const LOG_FILE_PREFIX: &str = "demodeck";

// Dropping the guard would lose buffered log lines; it lives for the whole
// process.
static WORKER_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct LoggingGuard {
    log_dir: PathBuf,
    level: String,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn level(&self) -> &str {
        &self.level
    }
}

/// Installs the global subscriber: env-filtered stderr output plus a
/// daily-rolling file in the app log directory.
pub fn init_logging(app: &tauri::App) -> AppResult<LoggingGuard> {
    let log_dir = app.path().app_log_dir().map_err(|error| {
        AppError::new("log_dir_unavailable", "failed to resolve log directory")
            .with_detail(error.to_string())
    })?;
    fs::create_dir_all(&log_dir)?;

    let file_appender = RollingBuilder::new()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|error| {
            AppError::new("log_appender_init_failed", "failed to open log file")
                .with_detail(error.to_string())
        })?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let level = filter.to_string();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|error| {
            AppError::new("log_subscriber_init_failed", "failed to install subscriber")
                .with_detail(error.to_string())
        })?;

    let _ = WORKER_GUARD.set(guard);
    Ok(LoggingGuard { log_dir, level })
}

pub(crate) fn log_error_fallback(message: &str) {
    if tracing::dispatcher::has_been_set() {
        tracing::error!(event = "bootstrap_error", message = message);
        return;
    }

    eprintln!("{message}");
}
