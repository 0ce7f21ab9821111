//! # WebRS Build Command
//!
//! File: cli/src/commands/build.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! The `webrs build` command: clean the output tree, then run every asset
//! stage in parallel and wait for all of them. This is the one-shot variant
//! of what `webrs dev` runs before it starts serving.
//!
//! A stage compile error (bad SCSS, bad JS) is logged by the stage and does
//! not fail the command — the affected output simply is not refreshed.
//! Filesystem errors fail the command.
//!
use crate::core::config::BuildConfig;
use crate::core::error::Result;
use crate::pipeline::build_graph;
use tracing::info;

/// # Build Handler (`handle_build`)
///
/// Runs the full build graph to completion against the effective
/// configuration.
pub async fn handle_build(config: BuildConfig) -> Result<()> {
    info!(
        "Building {} -> {} ({:?} mode)",
        config.src.display(),
        config.dist.display(),
        config.env
    );

    build_graph(&config, None).run().await?;

    info!("Build complete");
    Ok(())
}
