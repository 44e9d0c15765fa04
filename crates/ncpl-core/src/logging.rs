//! Logging init: file under the XDG state dir, stderr when that fails.
//!
//! The guided session owns stdout for prompts, so log lines never go there.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset and logs go to the file.
const FILE_FILTER: &str = "info,ncpl=debug,ncpl_core=debug,ncpl_cli=debug";

/// Filter used when `RUST_LOG` is unset and logs share the terminal.
const STDERR_FILTER: &str = "warn";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// `~/.local/state/ncpl/ncpl.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ncpl")?;
    Ok(xdg_dirs.get_state_home().join("ncpl.log"))
}

/// Appends structured logs to [`log_file_path`]. Errors leave no subscriber
/// installed so the caller can use [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(FILE_FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "ncpl {} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}

/// Warnings and errors on stderr only, so prompts stay readable.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(STDERR_FILTER))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
