//! # WebRS Library Crate
//!
//! File: cli/src/lib.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! WebRS is a front-end asset pipeline and development server: it compiles
//! SCSS, bundles and lints scripts, copies static assets, serves the result
//! with live reload, and rebuilds on source changes. The library crate
//! exposes everything the `webrs` binary uses so the pieces are testable in
//! isolation:
//!
//! - `core`: configuration, path groups, and the error taxonomy.
//! - `common`: shared utilities (filesystem copies, the reload channel).
//! - `pipeline`: the task graph, transform stages, and minifiers.
//! - `commands`: the handlers behind each CLI command.
//! - `menu`: the headless model of the site's navigation interaction logic.
//!

/// Handlers for the CLI commands (build, clean, dev, per-stage).
pub mod commands;
/// Shared utilities: filesystem helpers and the live-reload channel.
pub mod common;
/// Core infrastructure: configuration and errors.
pub mod core;
/// Headless navigation interaction model (panel, submenu, focus).
pub mod menu;
/// Task graph and asset transform stages.
pub mod pipeline;
