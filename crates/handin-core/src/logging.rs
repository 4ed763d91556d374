//! Logging init: append to a file under the XDG state dir, or stderr.
//!
//! Console output belongs to the workflow (prompts, server responses); tracing
//! output goes to the log file so it never interleaves with the prompts.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,handin_core=debug,handin=debug";
const LOG_FILE: &str = "handin.log";

/// `~/.local/state/handin/handin.log` (or `$XDG_STATE_HOME/handin/handin.log`).
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("handin")?;
    Ok(xdg_dirs.get_state_home().join("handin").join(LOG_FILE))
}

/// Open `path` for appending, creating its directory first.
fn open_append(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))
}

/// Initialize structured logging to [`log_file_path`].
/// On failure (e.g. state dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_append(&path)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Events from the single workflow thread; the lock is never contended.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(log = %path.display(), "handin logging initialized");
    Ok(())
}

/// Stderr-only logging for when [`init_logging`] fails.
///
/// Only warnings and errors by default, so the consent and credential prompts stay readable.
pub fn init_logging_stderr() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
