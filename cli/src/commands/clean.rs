//! # WebRS Clean Command
//!
//! File: cli/src/commands/clean.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! The `webrs clean` command: removes the output tree entirely. A missing
//! output tree is a successful no-op.
//!
use crate::core::config::BuildConfig;
use crate::core::error::Result;
use crate::pipeline::stages::clean::clean_dist;
use anyhow::Context;

/// # Clean Handler (`handle_clean`)
///
/// Removes the output directory on the blocking pool.
pub async fn handle_clean(config: BuildConfig) -> Result<()> {
    tokio::task::spawn_blocking(move || clean_dist(&config))
        .await
        .context("Clean task panicked")?
}
