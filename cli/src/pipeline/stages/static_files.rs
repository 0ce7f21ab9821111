//! # WebRS Static-Copy Stages
//!
//! File: cli/src/pipeline/stages/static_files.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! Verbatim copy stages for asset types that need no transformation: PHP
//! server-side templates (scattered through the source tree like HTML, so
//! glob-filtered), and fonts/images (self-contained directories copied
//! wholesale). All three preserve relative paths and share a single
//! parameterized stage type.
//!
use super::{Stage, StageReport};
use crate::common::fs::copy;
use crate::common::reload::ReloadEvent;
use crate::core::config::{group_for, AssetKind, BuildConfig};
use crate::core::error::Result;

/// How the stage locates its sources.
enum CopyMode {
    /// Glob over the whole source root (PHP files live anywhere).
    Glob,
    /// Copy a single subdirectory's contents wholesale.
    Directory(&'static str),
}

/// Parameterized verbatim copy stage.
pub struct CopyStage {
    kind: AssetKind,
    mode: CopyMode,
}

impl CopyStage {
    /// Stage for server-side PHP templates (`src/**/*.php` → `dist/`).
    pub fn php() -> Self {
        Self {
            kind: AssetKind::Php,
            mode: CopyMode::Glob,
        }
    }

    /// Stage for font files (`src/fonts/` → `dist/fonts/`).
    pub fn fonts() -> Self {
        Self {
            kind: AssetKind::Fonts,
            mode: CopyMode::Directory("fonts"),
        }
    }

    /// Stage for image files (`src/imgs/` → `dist/imgs/`).
    pub fn images() -> Self {
        Self {
            kind: AssetKind::Images,
            mode: CopyMode::Directory("imgs"),
        }
    }
}

impl Stage for CopyStage {
    fn kind(&self) -> AssetKind {
        self.kind
    }

    fn reload(&self) -> ReloadEvent {
        ReloadEvent::Full
    }

    fn run(&self, config: &BuildConfig) -> Result<StageReport> {
        let group = group_for(self.kind);
        let dest = config.dest_dir(group);

        let written = match self.mode {
            CopyMode::Glob => copy::copy_glob(&config.src, group.pattern, &dest)?,
            CopyMode::Directory(subdir) => {
                copy::copy_dir_contents(&config.src.join(subdir), &dest)?
            }
        };

        Ok(StageReport::wrote(written))
    }
}
