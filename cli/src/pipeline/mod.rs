//! # WebRS Pipeline Composer
//!
//! File: cli/src/pipeline/mod.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! This module ties the asset transform stages to the task graph. It builds
//! the named task graphs the CLI exposes:
//!
//! - `build`: clean, then every stage in parallel (joined before completion).
//! - The `dev` command reuses the `build` graph, then starts the dev server
//!   and file watcher itself — those are resident services, not graph nodes
//!   that run to completion.
//!
//! ## Architecture
//!
//! Stages are synchronous (blocking file I/O and CPU-bound transforms), so
//! the `StageTask` adapter runs each one on the Tokio blocking pool. The
//! adapter goes through `stages::run_stage`, which is also what the watcher
//! calls — stage execution and reload publication have exactly one code
//! path.
//!
use crate::common::reload::ReloadChannel;
use crate::core::config::BuildConfig;
use crate::core::error::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::sync::Arc;

/// The task graph node types and the `Task` seam.
pub mod graph;
/// Light CSS/JS minifiers used by the style and script stages.
pub mod minify;
/// The per-asset-type transform stages.
pub mod stages;

use graph::{Task, TaskNode};
use stages::Stage;

/// # Stage Task Adapter (`StageTask`)
///
/// Wraps a synchronous `Stage` as an async graph `Task`, shifting the
/// blocking work onto the runtime's blocking pool so parallel stages really
/// do overlap.
pub struct StageTask {
    stage: Arc<dyn Stage>,
    config: BuildConfig,
    reload: Option<ReloadChannel>,
}

#[async_trait]
impl Task for StageTask {
    fn name(&self) -> &str {
        self.stage.name()
    }

    async fn run(&self) -> Result<()> {
        let stage = self.stage.clone();
        let config = self.config.clone();
        let reload = self.reload.clone();

        tokio::task::spawn_blocking(move || {
            stages::run_stage(stage.as_ref(), &config, reload.as_ref()).map(|_| ())
        })
        .await
        .context("Stage task panicked")?
    }
}

/// Clean step as a graph leaf.
struct CleanTask {
    config: BuildConfig,
}

#[async_trait]
impl Task for CleanTask {
    fn name(&self) -> &str {
        "clean"
    }

    async fn run(&self) -> Result<()> {
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || stages::clean::clean_dist(&config))
            .await
            .context("Clean task panicked")?
    }
}

/// # Build Graph (`build_graph`)
///
/// Composes the `build` task graph: clean, then all asset stages in
/// parallel. A reload channel is attached when the caller wants completed
/// stages to notify connected browsers (the `dev` command); one-shot builds
/// pass `None`.
pub fn build_graph(config: &BuildConfig, reload: Option<&ReloadChannel>) -> TaskNode {
    let stage_nodes = stages::all_stages()
        .into_iter()
        .map(|stage| {
            TaskNode::leaf(StageTask {
                stage,
                config: config.clone(),
                reload: reload.cloned(),
            })
        })
        .collect();

    TaskNode::series(vec![
        TaskNode::leaf(CleanTask {
            config: config.clone(),
        }),
        TaskNode::parallel(stage_nodes),
    ])
}

/// Single-stage graph for the per-asset-type CLI tasks (`webrs css`, ...).
pub fn stage_graph(kind: crate::core::config::AssetKind, config: &BuildConfig) -> TaskNode {
    TaskNode::leaf(StageTask {
        stage: stages::stage_for(kind),
        config: config.clone(),
        reload: None,
    })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EnvMode;
    use std::fs;
    use tempfile::TempDir;

    fn scaffold(tmp: &TempDir) -> BuildConfig {
        let config = BuildConfig {
            env: EnvMode::Development,
            src: tmp.path().join("src"),
            dist: tmp.path().join("dist"),
            ..BuildConfig::default()
        };
        fs::create_dir_all(config.src.join("scss")).unwrap();
        fs::create_dir_all(config.src.join("js")).unwrap();
        fs::write(
            config.src.join("index.html"),
            "<html><body>hi</body></html>",
        )
        .unwrap();
        fs::write(config.src.join("scss/style.scss"), "body { margin: 0; }\n").unwrap();
        fs::write(config.src.join("js/main.js"), "let a = 1;\n").unwrap();
        config
    }

    /// A full build graph run produces every stage's output and removes
    /// stale files from a previous build.
    #[tokio::test]
    async fn test_build_graph_produces_all_outputs() -> Result<()> {
        let tmp = TempDir::new()?;
        let config = scaffold(&tmp);

        // Plant a stale file; clean must sweep it before stages run.
        fs::create_dir_all(&config.dist)?;
        fs::write(config.dist.join("stale.txt"), "old")?;

        build_graph(&config, None).run().await?;

        assert!(config.dist.join("index.html").exists());
        assert!(config.dist.join("css/style.min.css").exists());
        assert!(config.dist.join("js/main.min.js").exists());
        assert!(!config.dist.join("stale.txt").exists());
        Ok(())
    }

    /// Running the build twice without source changes yields byte-identical
    /// output.
    #[tokio::test]
    async fn test_build_graph_is_idempotent() -> Result<()> {
        let tmp = TempDir::new()?;
        let config = scaffold(&tmp);

        build_graph(&config, None).run().await?;
        let css_a = fs::read(config.dist.join("css/style.min.css"))?;
        let js_a = fs::read(config.dist.join("js/main.min.js"))?;
        let html_a = fs::read(config.dist.join("index.html"))?;

        build_graph(&config, None).run().await?;
        assert_eq!(css_a, fs::read(config.dist.join("css/style.min.css"))?);
        assert_eq!(js_a, fs::read(config.dist.join("js/main.min.js"))?);
        assert_eq!(html_a, fs::read(config.dist.join("index.html"))?);
        Ok(())
    }

    #[tokio::test]
    async fn test_stage_graph_runs_one_stage_only() -> Result<()> {
        let tmp = TempDir::new()?;
        let config = scaffold(&tmp);

        stage_graph(crate::core::config::AssetKind::Styles, &config)
            .run()
            .await?;

        assert!(config.dist.join("css/style.min.css").exists());
        // Other stages did not run.
        assert!(!config.dist.join("index.html").exists());
        assert!(!config.dist.join("js").exists());
        Ok(())
    }
}
