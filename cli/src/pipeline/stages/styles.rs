//! # WebRS Style Stage
//!
//! File: cli/src/pipeline/stages/styles.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! Compiles the SCSS tree to CSS, applies vendor prefixing, and minifies in
//! production. Each non-partial entry file (one whose name does not start
//! with `_`) becomes `dist/css/<stem>.min.css`; partials are reachable only
//! through `@use`/`@import` from an entry. The `.min` filename is kept
//! stable across modes so pages always link one name — the development
//! build simply writes the expanded CSS under it.
//!
//! ## Collaborators
//!
//! Sass compilation is delegated to the `grass` crate as a black box: source
//! text in, CSS out, or a compile error. Vendor prefixing is a small
//! table-driven pass covering the properties this project's stylesheets
//! actually need prefixed.
//!
//! ## Failure policy
//!
//! A compile error in any entry is logged and flagged; that entry's previous
//! output is left untouched and remaining entries still build. The watch
//! loop must survive half-written stylesheets being saved.
//!
use super::{Stage, StageReport};
use crate::common::reload::ReloadEvent;
use crate::core::config::{AssetKind, BuildConfig};
use crate::core::error::{Result, WebrsError};
use crate::pipeline::minify;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error};
use walkdir::WalkDir;

/// Properties duplicated with vendor prefixes, in emission order.
const PREFIXED_PROPERTIES: &[(&str, &[&str])] = &[
    ("appearance", &["-webkit-", "-moz-"]),
    ("user-select", &["-webkit-", "-moz-", "-ms-"]),
    ("backdrop-filter", &["-webkit-"]),
    ("text-size-adjust", &["-webkit-", "-ms-"]),
    ("hyphens", &["-webkit-", "-ms-"]),
    ("tab-size", &["-moz-"]),
];

/// SCSS compile + prefix + minify stage.
pub struct StylesStage;

impl Stage for StylesStage {
    fn kind(&self) -> AssetKind {
        AssetKind::Styles
    }

    fn reload(&self) -> ReloadEvent {
        ReloadEvent::Styles
    }

    fn run(&self, config: &BuildConfig) -> Result<StageReport> {
        let scss_dir = config.scss_dir();
        let dest_dir = config.dest_dir(crate::core::config::group_for(self.kind()));

        let entries = find_entries(&scss_dir)?;
        if entries.is_empty() {
            debug!("No SCSS entries under {}", scss_dir.display());
            return Ok(StageReport::default());
        }

        fs::create_dir_all(&dest_dir)
            .with_context(|| format!("Failed to create directory {}", dest_dir.display()))?;

        let mut report = StageReport::default();
        let options = grass::Options::default()
            .style(grass::OutputStyle::Expanded)
            .load_path(&scss_dir);

        for entry in entries {
            let source = fs::read_to_string(&entry)
                .with_context(|| format!("Failed to read {}", entry.display()))?;

            let css = match grass::from_string(source, &options) {
                Ok(css) => css,
                Err(e) => {
                    // Compile errors never escalate: log, leave the previous
                    // output for this entry in place, keep building others.
                    let err = WebrsError::Compile {
                        stage: self.name().to_string(),
                        message: e.to_string(),
                    };
                    error!("{} ({})", err, entry.display());
                    report.compile_failed = true;
                    continue;
                }
            };

            let mut css = apply_vendor_prefixes(&css);
            if config.env.minify() {
                css = minify::minify_css(&css);
            }

            let stem = entry
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("style");
            let dest = dest_dir.join(format!("{stem}.min.css"));
            fs::write(&dest, css)
                .with_context(|| format!("Failed to write {}", dest.display()))?;
            report.written.push(dest);
        }

        Ok(report)
    }
}

/// Finds entry stylesheets: `.scss`/`.sass` files whose name does not start
/// with `_`, sorted for deterministic output.
fn find_entries(scss_dir: &std::path::Path) -> Result<Vec<PathBuf>> {
    if !scss_dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(scss_dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", scss_dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        let is_sass = name.ends_with(".scss") || name.ends_with(".sass");
        if is_sass && !name.starts_with('_') {
            entries.push(entry.into_path());
        }
    }
    entries.sort();
    Ok(entries)
}

/// Duplicates known declarations with their vendor-prefixed forms, emitted
/// immediately before the standard property so the standard one wins where
/// both are supported.
fn apply_vendor_prefixes(css: &str) -> String {
    let mut out = String::with_capacity(css.len());

    for line in css.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        for (property, prefixes) in PREFIXED_PROPERTIES {
            if declares(trimmed, property) {
                for prefix in *prefixes {
                    out.push_str(indent);
                    out.push_str(prefix);
                    out.push_str(trimmed);
                    out.push('\n');
                }
                break;
            }
        }

        out.push_str(line);
        out.push('\n');
    }

    out
}

/// True when a trimmed line is a declaration of exactly `property`.
fn declares(line: &str, property: &str) -> bool {
    line.strip_prefix(property)
        .map(|rest| rest.trim_start().starts_with(':'))
        .unwrap_or(false)
}
