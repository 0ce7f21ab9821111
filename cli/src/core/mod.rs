//! # WebRS Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by every command:
//! configuration loading/merging and the error types. Anything here is
//! domain-agnostic plumbing; the pipeline and menu modules build on it.
//!

/// Build configuration: environment mode, source/output roots, path groups.
pub mod config;
/// Error enum (`WebrsError`) and the crate-wide `Result` alias.
pub mod error;
