//! # WebRS Clean Step
//!
//! File: cli/src/pipeline/stages/clean.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! Removes the entire output directory ahead of a full rebuild so no stale
//! files from a prior build survive. A missing output directory is a no-op,
//! not an error; anything else (permissions, files held open) is a
//! filesystem error and fatal for the invoking task.
//!
use crate::core::config::BuildConfig;
use crate::core::error::{Result, WebrsError};
use std::fs;
use tracing::info;

/// Recursively removes the output directory. No-op when it does not exist.
pub fn clean_dist(config: &BuildConfig) -> Result<()> {
    if !config.dist.exists() {
        info!(
            "Output directory {} does not exist; nothing to clean",
            config.dist.display()
        );
        return Ok(());
    }

    fs::remove_dir_all(&config.dist).map_err(|e| {
        WebrsError::FileSystem(format!("Failed to remove {}: {e}", config.dist.display()))
    })?;
    info!("Removed output directory {}", config.dist.display());
    Ok(())
}
