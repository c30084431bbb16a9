//! File-backed tracing subscriber.
//!
//! The terminal belongs to the UI, so log records go to a file with ANSI
//! colors off.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// `<data dir>/candleclash/candleclash.log`, or `./candleclash.log` when the
/// platform has no data directory.
pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("candleclash"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("candleclash.log")
}

/// Install the global subscriber, appending to `path`.
pub fn init(path: &Path, level: Level) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create log directory {}", parent.display()))?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("install log subscriber")?;
    Ok(())
}
