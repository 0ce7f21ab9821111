//! # WebRS HTML Stage
//!
//! File: cli/src/pipeline/stages/html.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! Copies every `*.html` under the source root verbatim to the output root,
//! preserving relative paths. In development mode each page additionally
//! gets the live-reload client snippet injected before `</body>`, so a
//! browser pointed at the dev server picks up reload events without any
//! markup changes in the source tree. Production builds are byte-for-byte
//! copies.
//!
use super::{Stage, StageReport};
use crate::common::fs::copy;
use crate::common::reload::ReloadEvent;
use crate::core::config::{group_for, AssetKind, BuildConfig, EnvMode};
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use tracing::debug;

/// Script tag appended to each page in development builds.
const RELOAD_SNIPPET: &str = "<script src=\"/__webrs/client.js\"></script>";

/// HTML copy stage.
pub struct HtmlStage;

impl Stage for HtmlStage {
    fn kind(&self) -> AssetKind {
        AssetKind::Html
    }

    fn reload(&self) -> ReloadEvent {
        ReloadEvent::Full
    }

    fn run(&self, config: &BuildConfig) -> Result<StageReport> {
        let group = group_for(self.kind());
        let dest_root = config.dest_dir(group);
        let written = copy::copy_glob(&config.src, group.pattern, &dest_root)?;

        if config.env == EnvMode::Development {
            for path in &written {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                fs::write(path, inject_reload_snippet(&content))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                debug!("Injected reload snippet into {}", path.display());
            }
        }

        Ok(StageReport::wrote(written))
    }
}

/// Inserts the reload snippet before `</body>`, or appends it when the page
/// has no closing body tag. Idempotent for repeated dev builds because the
/// source file, not the destination, is the injection input each time.
fn inject_reload_snippet(html: &str) -> String {
    match html.rfind("</body>") {
        Some(idx) => {
            let mut out = String::with_capacity(html.len() + RELOAD_SNIPPET.len() + 1);
            out.push_str(&html[..idx]);
            out.push_str(RELOAD_SNIPPET);
            out.push('\n');
            out.push_str(&html[idx..]);
            out
        }
        None => format!("{html}\n{RELOAD_SNIPPET}\n"),
    }
}
