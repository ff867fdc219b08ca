//! File-backed tracing setup. The alternate screen belongs to the UI, so log
//! lines never go to stdout or stderr while it is active.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber. Returns `false` when no log file is
/// configured and nothing was installed. `RUST_LOG` overrides the level.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let Some(path) = &config.file else {
        return Ok(false);
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.level.to_lowercase())),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok(); // Ignore error if already initialized
    Ok(true)
}
