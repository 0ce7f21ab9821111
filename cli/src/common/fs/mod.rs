//! # WebRS Filesystem Utilities
//!
//! File: cli/src/common/fs/mod.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! Shared filesystem helpers used by the asset transform stages. Kept
//! separate from the stages themselves so copy semantics (glob matching,
//! relative-path preservation, overwrite behavior) are testable in
//! isolation.
//!

/// Glob-filtered and recursive copy operations.
pub mod copy;
