//! Logging setup
//!
//! Events go to a daily rolling file and to the in-app log pane. Nothing is
//! written to stdout since the terminal belongs to the UI.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{AppError, AppResult};

pub const LOG_FILE_PREFIX: &str = "prompt-clip.log";

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides `level`. The returned guard flushes the file writer
/// on drop and must live as long as the application.
pub fn init(level: &str, log_dir: &Path) -> AppResult<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},sqlx=warn")));

    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(non_blocking_file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(tui_logger::tracing_subscriber_layer())
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to install tracing subscriber: {e}")))?;

    // The registry already bridges the `log` crate when it is installed first
    if let Err(e) = tui_logger::init_logger(log::LevelFilter::Info) {
        tracing::debug!(error = %e, "log bridge already installed");
    }
    tui_logger::set_default_level(log::LevelFilter::Info);

    tracing::info!(path = %log_dir.display(), "Tracing initialized");
    Ok(guard)
}
