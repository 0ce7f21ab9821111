//! # WebRS Command Handlers
//!
//! File: cli/src/commands/mod.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! One handler per CLI command. Argument parsing lives in `main.rs`; the
//! handlers here receive the already-merged `BuildConfig` and do the work:
//!
//! - `build`: one-shot full pipeline run.
//! - `clean`: remove the output tree.
//! - `stage`: run a single asset stage (backs `html`, `css`, `js`, `php`,
//!   `fonts`, `images`).
//! - `dev`: build, then serve with live reload and watch for changes.
//!

/// Full pipeline build.
pub mod build;
/// Output tree removal.
pub mod clean;
/// Dev server, watcher, and live reload.
pub mod dev;
/// Single-stage runs.
pub mod stage;
