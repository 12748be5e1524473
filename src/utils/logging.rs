//! Process-wide logging and panic-hook initialization
//!
//! Both entry points are called exactly once at process start, before any
//! other work. The subscriber lives for the rest of the process and is torn
//! down implicitly at exit.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Directory for per-step log files, relative to the working directory.
pub const LOG_DIR: &str = "logs";

/// Initialize logging to `logs/<step>.log`, creating the directory if absent.
///
/// The file is opened in append mode so repeated runs accumulate in one log.
/// Level defaults to INFO and can be widened via `RUST_LOG`. Returns the log
/// file path for display.
pub fn init_logging(step: &str) -> Result<PathBuf> {
    let log_dir = Path::new(LOG_DIR);
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let log_path = log_dir.join(format!("{step}.log"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(
        "run started {}",
        Local::now().format("%Y-%m-%d %H:%M:%S %Z")
    );

    Ok(log_path)
}

/// Install a panic hook that logs the panic before the default hook runs.
///
/// The message and a captured backtrace go to the log file at ERROR; the
/// previous hook then prints to stderr as usual and the panic keeps
/// propagating, so the process still terminates abnormally.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        tracing::error!("uncaught panic: {info}");
        tracing::error!("backtrace:\n{backtrace}");
        previous(info);
    }));
}
