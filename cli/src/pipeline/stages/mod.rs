//! # WebRS Asset Transform Stages
//!
//! File: cli/src/pipeline/stages/mod.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! One stage per asset type, each with the same contract: read the files
//! matched by the stage's path group, write transformed output under the
//! group's destination, and report what happened. Stages never write
//! outside their destination and never read another group's sources, which
//! is what makes the parallel composition safe without locking.
//!
//! ## Architecture
//!
//! - `Stage`: the synchronous per-asset-type seam. Stage bodies do blocking
//!   file I/O; the async adapter in `pipeline::mod` moves them onto the
//!   blocking pool.
//! - `run_stage`: the one place stage execution, logging, and live-reload
//!   publication meet. Both the task-graph leaves and the file watcher go
//!   through it.
//!
//! ## Failure policy
//!
//! Compile errors (Sass syntax, script lint) are caught inside the stage,
//! logged, and surfaced as `compile_failed` in the report — the process, and
//! in particular the watch loop, keeps running and the previous output stays
//! in place. Filesystem errors propagate as fatal for the invoking task.
//!
use crate::common::reload::{ReloadChannel, ReloadEvent};
use crate::core::config::{AssetKind, BuildConfig};
use crate::core::error::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Stage that copies HTML files and injects the dev reload snippet.
pub mod html;
/// Stage that compiles, prefixes, and minifies stylesheets.
pub mod styles;
/// Stage that bundles, lints, and minifies scripts.
pub mod scripts;
/// Verbatim copy stages for PHP, fonts, and images.
pub mod static_files;
/// Output directory removal.
pub mod clean;

/// # Stage Report (`StageReport`)
///
/// What a stage run produced: the files written and whether a compile error
/// was swallowed (in which case `written` reflects only what succeeded and
/// prior output for the failed entries is untouched).
#[derive(Debug, Default)]
pub struct StageReport {
    /// Destination paths written by this run.
    pub written: Vec<PathBuf>,
    /// True when a compile/lint error was caught and logged.
    pub compile_failed: bool,
}

impl StageReport {
    /// Report for a clean run that wrote the given files.
    pub fn wrote(written: Vec<PathBuf>) -> Self {
        Self {
            written,
            compile_failed: false,
        }
    }
}

/// # Asset Transform Stage (`Stage`)
///
/// Contract: given the build configuration, produce transformed output under
/// this stage's path-group destination. Implementations are synchronous and
/// side-effect only through the filesystem.
pub trait Stage: Send + Sync {
    /// The asset kind (and path group) this stage owns.
    fn kind(&self) -> AssetKind;

    /// Stage name for logs and task graph nodes.
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// What connected browsers should do after this stage writes output.
    fn reload(&self) -> ReloadEvent;

    /// Runs the transform to completion.
    fn run(&self, config: &BuildConfig) -> Result<StageReport>;
}

/// Builds the full set of stages, one per asset kind, in build order.
pub fn all_stages() -> Vec<Arc<dyn Stage>> {
    vec![
        Arc::new(html::HtmlStage),
        Arc::new(styles::StylesStage),
        Arc::new(scripts::ScriptsStage),
        Arc::new(static_files::CopyStage::php()),
        Arc::new(static_files::CopyStage::fonts()),
        Arc::new(static_files::CopyStage::images()),
    ]
}

/// Looks up the single stage owning an asset kind.
pub fn stage_for(kind: AssetKind) -> Arc<dyn Stage> {
    match kind {
        AssetKind::Html => Arc::new(html::HtmlStage),
        AssetKind::Styles => Arc::new(styles::StylesStage),
        AssetKind::Scripts => Arc::new(scripts::ScriptsStage),
        AssetKind::Php => Arc::new(static_files::CopyStage::php()),
        AssetKind::Fonts => Arc::new(static_files::CopyStage::fonts()),
        AssetKind::Images => Arc::new(static_files::CopyStage::images()),
    }
}

/// # Run a Stage (`run_stage`)
///
/// Executes one stage and, when a live-reload channel is attached and the
/// run succeeded without compile errors, publishes the stage's reload event.
/// This is the single entry point used by both the task-graph leaves and
/// the file watcher, so notification behavior cannot drift between them.
///
/// ## Errors
///
/// Propagates filesystem errors from the stage. Compile errors do not
/// surface here; they are already logged and flagged in the report.
pub fn run_stage(
    stage: &dyn Stage,
    config: &BuildConfig,
    reload: Option<&ReloadChannel>,
) -> Result<StageReport> {
    info!("Stage '{}' starting", stage.name());
    let report = stage.run(config)?;

    if report.compile_failed {
        warn!(
            "Stage '{}' finished with compile errors; previous output left in place",
            stage.name()
        );
    } else {
        info!(
            "Stage '{}' wrote {} file(s)",
            stage.name(),
            report.written.len()
        );
        if let Some(channel) = reload {
            channel.notify(stage.reload());
        }
    }

    Ok(report)
}
