//! # WebRS Dev Command
//!
//! File: cli/src/commands/dev/mod.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! The `webrs dev` command (the default task): run a full build, then keep
//! a dev server and a source watcher resident until interrupted. The three
//! pieces share one reload channel — stage completions anywhere (initial
//! build or watcher-triggered rebuild) fan out to every connected browser.
//!
//! ## Architecture
//!
//! - Initial build: the same task graph `webrs build` runs, awaited to
//!   completion before the server accepts connections.
//! - Server: async, on the main runtime.
//! - Watcher: synchronous loop on the blocking pool for the life of the
//!   process.
//!
//! A failed initial build is fatal only for filesystem errors; compile
//! errors inside stages are logged and leave stale output in place, so the
//! server still comes up and the watcher picks up the fix.
//!
use crate::common::reload::ReloadChannel;
use crate::core::config::BuildConfig;
use crate::core::error::Result;
use crate::pipeline::build_graph;
use anyhow::Context;
use tracing::{error, info};

/// HTTP server and live-reload endpoints.
pub mod server;
/// Debounced source tree watcher.
pub mod watcher;

/// # Dev Handler (`handle_dev`)
///
/// Runs the initial build, then starts the server and watcher on the shared
/// reload channel. Returns when the server shuts down (Ctrl+C/SIGTERM).
pub async fn handle_dev(config: BuildConfig) -> Result<()> {
    info!("Starting dev session ({:?} mode)", config.env);

    let reload = ReloadChannel::new();

    build_graph(&config, Some(&reload))
        .run()
        .await
        .context("Initial build failed")?;

    let watcher_config = config.clone();
    let watcher_reload = reload.clone();
    tokio::task::spawn_blocking(move || {
        if let Err(e) = watcher::watch_loop(watcher_config, watcher_reload) {
            error!("Watcher stopped: {:#}", e);
        }
    });

    server::run_server(config, reload).await
}
