//! Logging init: file under XDG state dir, or graceful fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,dlguard=debug"))
}

/// Initialize structured logging to `~/.local/state/dlguard/dlguard.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall
/// back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dlguard")?;
    let log_dir = xdg_dirs.get_state_home().join("dlguard");

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("dlguard.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    // Each log call clones the handle; if that ever fails, fall back to
    // stderr rather than panicking inside the subscriber.
    let writer = move || -> Box<dyn io::Write> {
        match file.try_clone() {
            Ok(f) => Box::new(f),
            Err(_) => Box::new(io::stderr()),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("dlguard logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging()
/// fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
