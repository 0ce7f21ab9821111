//! # WebRS Task Graph
//!
//! File: cli/src/pipeline/graph.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! This module implements the pipeline composer's task graph: a named,
//! composable unit of build work that is either a single leaf task or a
//! sequential/parallel group of other nodes. The graph is acyclic by
//! construction (child nodes are owned values), resolved once at startup,
//! and never mutated at runtime.
//!
//! ## Architecture
//!
//! - `Task`: the uniform "run to completion" seam. Leaves are trait objects
//!   so tests can inject mock implementations and real stages stay
//!   decoupled from the composer.
//! - `TaskNode::Series`: runs children in order, stopping at the first
//!   failure.
//! - `TaskNode::Parallel`: starts all children concurrently on the runtime,
//!   joins all of them, and reports the first failure. Stages in a parallel
//!   group own disjoint path groups, so no ordering guarantee is needed.
//!
//! "Parallel" here means concurrent I/O-bound futures multiplexed on the
//! async runtime; blocking stage work is shifted onto the blocking pool by
//! the leaf implementations themselves.
//!
//! ## Examples
//!
//! The build graph looks like:
//!
//! ```text
//! Series [ clean, Parallel [ html, styles, scripts, php, fonts, images ] ]
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use async_trait::async_trait;
use futures_util::future::{join_all, BoxFuture};
use std::sync::Arc;
use tracing::debug;

/// # Task (`Task`)
///
/// The uniform interface every leaf of the graph exposes: run to completion,
/// resolve (or fail) when done. Implemented by the stage adapter in the
/// pipeline module and by mock tasks in tests.
#[async_trait]
pub trait Task: Send + Sync {
    /// Human-readable task name, used in logs and error context.
    fn name(&self) -> &str;

    /// Runs the unit of work to completion.
    async fn run(&self) -> Result<()>;
}

/// # Task Graph Node (`TaskNode`)
///
/// A leaf task or a sequential/parallel composition of other nodes.
/// Compositions nest arbitrarily.
pub enum TaskNode {
    /// A single unit of work.
    Leaf(Arc<dyn Task>),
    /// Children run one after another; the first failure stops the series.
    Series(Vec<TaskNode>),
    /// Children run concurrently; all are joined before the node completes.
    Parallel(Vec<TaskNode>),
}

impl TaskNode {
    /// Wraps a task into a leaf node.
    pub fn leaf(task: impl Task + 'static) -> Self {
        TaskNode::Leaf(Arc::new(task))
    }

    /// Builds a sequential composition.
    pub fn series(nodes: Vec<TaskNode>) -> Self {
        TaskNode::Series(nodes)
    }

    /// Builds a parallel composition.
    pub fn parallel(nodes: Vec<TaskNode>) -> Self {
        TaskNode::Parallel(nodes)
    }

    /// # Run the Graph (`run`)
    ///
    /// The single entry point: recursively executes this node to
    /// completion. Returns the first error encountered, with the failing
    /// leaf's name attached as context.
    ///
    /// Boxed because the future recurses through the node tree.
    pub fn run(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            match self {
                TaskNode::Leaf(task) => {
                    debug!("Task '{}' starting", task.name());
                    task.run()
                        .await
                        .with_context(|| format!("Task '{}' failed", task.name()))?;
                    debug!("Task '{}' complete", task.name());
                    Ok(())
                }
                TaskNode::Series(nodes) => {
                    for node in nodes {
                        node.run().await?;
                    }
                    Ok(())
                }
                TaskNode::Parallel(nodes) => {
                    let results = join_all(nodes.iter().map(|node| node.run())).await;
                    for result in results {
                        result?;
                    }
                    Ok(())
                }
            }
        })
    }
}

// --- Unit Tests ---
