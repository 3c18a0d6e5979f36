//! File-backed debug logging
//!
//! The terminal owns stdout while the game runs, so log records go to a file.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Install a global logger writing to `path` (truncated).
///
/// Defaults to `debug`; `RUST_LOG` overrides. Fails if the file cannot be
/// created or a logger is already installed.
pub fn init_file_logger(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    Builder::new()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already initialized")?;

    log::info!("Logging to {}", path.display());
    Ok(())
}
