//! # WebRS Per-Stage Commands
//!
//! File: cli/src/commands/stage.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! Handler behind the per-asset-type commands (`webrs html`, `webrs css`,
//! `webrs js`, `webrs php`, `webrs fonts`, `webrs images`): runs exactly one
//! transform stage against the effective configuration, without cleaning and
//! without touching any other stage's output.
//!
use crate::core::config::{AssetKind, BuildConfig};
use crate::core::error::Result;
use crate::pipeline::stage_graph;
use tracing::info;

/// # Stage Handler (`handle_stage`)
///
/// Runs the single stage owning `kind` to completion.
pub async fn handle_stage(kind: AssetKind, config: BuildConfig) -> Result<()> {
    info!("Running '{}' stage ({:?} mode)", kind, config.env);
    stage_graph(kind, &config).run().await
}
