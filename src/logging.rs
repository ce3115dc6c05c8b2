//! Tracing setup for the terminal runner.
//!
//! The game owns the terminal (raw mode, alternate screen), so log lines can
//! never go to stdout or stderr. They go to `SNAKE_LOG_PATH` when set and are
//! discarded otherwise.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "tui_snake=info";

/// Install the global subscriber, appending to `log_path`.
///
/// Returns `Ok(false)` without installing anything when `log_path` is `None`.
pub fn init(log_path: Option<&Path>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .try_init()
        .context("install tracing subscriber")?;
    Ok(true)
}
