//! # WebRS Common Utilities
//!
//! File: cli/src/common/mod.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! Shared utilities that sit below the command layer: filesystem copy
//! helpers and the live-reload broadcast channel. Modules here know nothing
//! about the CLI surface; they are consumed by the pipeline stages and the
//! dev server.
//!

/// Filesystem helpers (glob copies, recursive directory copies).
pub mod fs;
/// The live-reload broadcast channel shared by stages and the dev server.
pub mod reload;
