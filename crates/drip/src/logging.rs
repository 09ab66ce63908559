//! File based tracing setup. The terminal is owned by the UI, so log
//! lines never go to stdout or stderr once the app is running.
//!
//! `RUST_LOG` takes precedence over the configured level, e.g.
//! `RUST_LOG=drip_scenes=debug drip` to follow every tick.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::{WrapErr, eyre};
use drip_config::LogConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to the configured log file.
/// Returns the file in use, or `None` when no location is available.
pub fn init_tracing(config: &LogConfig) -> color_eyre::Result<Option<PathBuf>> {
    let Some(path) = config.resolved_file() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install tracing subscriber: {err}"))?;

    Ok(Some(path))
}
