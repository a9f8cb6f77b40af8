//! File logging for the terminal client.
//!
//! The TUI owns stdout and stderr, so every event goes to a per-session file.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber writing to `<log_dir>/session_<secs>/client.log`.
///
/// Keep the returned guard alive for the whole run; dropping it flushes and
/// stops the background writer.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let base = log_dir.map_or_else(default_log_directory, Path::to_path_buf);

    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let session_dir = base.join(format!("session_{started}"));
    std::fs::create_dir_all(&session_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!(dir = %session_dir.display(), "logging initialized");
    Ok(guard)
}

/// Platform cache directory, e.g. `~/.cache/boshi/logs` on Linux.
pub fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "boshi")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/boshi"))
        .join("logs")
}
