//! # WebRS Error Types
//!
//! File: cli/src/core/error.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the WebRS application. It provides a consistent approach to
//! error management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `WebrsError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error taxonomy mirrors the pipeline's failure policy:
//! - **Compile errors** (Sass/script syntax or lint failures) are logged by the
//!   owning stage and never terminate the process — a usable watch loop depends
//!   on this.
//! - **Filesystem errors** (missing or unwritable paths during copy/clean) are
//!   fatal to the invoking task.
//! - **Server errors** (e.g. the configured port already in use) are fatal at
//!   startup.
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! # use anyhow::Context;
//! # use std::{fs, path::Path};
//! # use webrs::core::error::{Result, WebrsError};
//! # fn load(path: &Path) -> Result<String> {
//! // Return a specific error type
//! if !path.exists() {
//!     return Err(WebrsError::FileSystem(format!("Path not found: {}", path.display())).into());
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! # Ok(content)
//! # }
//! ```
//!
use thiserror::Error;

/// Custom error type for the WebRS application.
#[derive(Error, Debug)]
pub enum WebrsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Compile error in {stage} stage: {message}")]
    Compile { stage: String, message: String },

    #[error("Dev server error: {0}")]
    Server(String),

    #[error("File watcher error: {0}")]
    Watch(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
