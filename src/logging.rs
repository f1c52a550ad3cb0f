// Logging
// File-backed tracing output; the terminal itself is owned by the UI

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable naming the log file; logging is off when unset
pub const LOG_PATH_ENV: &str = "TAB_PANEL_LOG";

/// Initialize logging to `path`, filtered by `RUST_LOG` (default `info`)
pub fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))
}

/// Initialize logging when `TAB_PANEL_LOG` is set
pub fn init_from_env() -> Result<()> {
    match std::env::var_os(LOG_PATH_ENV) {
        Some(path) => init_logging(Path::new(&path)),
        None => Ok(()),
    }
}
