//! Tracing setup.
//!
//! The TUI owns stdout, so events go to a log file instead.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, appending to `log_file`.
///
/// `RUST_LOG` takes precedence over `default_level` when it is set.
pub fn init(log_file: &Path, default_level: &str) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)
}
