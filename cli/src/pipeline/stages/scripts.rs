//! # WebRS Script Stage
//!
//! File: cli/src/pipeline/stages/scripts.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! Bundles the script sources under `src/js/` into the single output
//! `dist/js/main.min.js`: files are linted, concatenated in deterministic
//! (lexicographic) order, and minified in production mode. The `.min`
//! suffix is part of the output contract regardless of mode.
//!
//! ## Collaborators
//!
//! Full module resolution, transpilation, and AST-level minification belong
//! to external bundler/transpiler collaborators and are out of scope. The
//! stage's own lint is structural only — unbalanced delimiters and
//! unterminated comments or strings — which catches the save-mid-edit
//! breakage the watch loop sees most.
//!
//! ## Failure policy
//!
//! Lint failures follow the compile-error policy: logged, flagged in the
//! report, previous bundle left untouched, process keeps running.
//!
use super::{Stage, StageReport};
use crate::common::reload::ReloadEvent;
use crate::core::config::{AssetKind, BuildConfig};
use crate::core::error::{Result, WebrsError};
use crate::pipeline::minify;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use walkdir::WalkDir;

/// Name of the bundled output file.
pub const BUNDLE_NAME: &str = "main.min.js";

/// Script lint + bundle + minify stage.
pub struct ScriptsStage;

impl Stage for ScriptsStage {
    fn kind(&self) -> AssetKind {
        AssetKind::Scripts
    }

    fn reload(&self) -> ReloadEvent {
        ReloadEvent::Scripts
    }

    fn run(&self, config: &BuildConfig) -> Result<StageReport> {
        let js_dir = config.js_dir();
        let sources = find_sources(&js_dir)?;
        if sources.is_empty() {
            debug!("No script sources under {}", js_dir.display());
            return Ok(StageReport::default());
        }

        let mut bundle = String::new();
        for path in &sources {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;

            if let Err(message) = lint(&source) {
                let err = WebrsError::Compile {
                    stage: self.name().to_string(),
                    message,
                };
                error!("{} ({})", err, path.display());
                // One broken source poisons the whole bundle; keep the
                // previous output and report the failure.
                return Ok(StageReport {
                    written: Vec::new(),
                    compile_failed: true,
                });
            }

            bundle.push_str(&source);
            if !source.ends_with('\n') {
                bundle.push('\n');
            }
        }

        if config.env.minify() {
            bundle = minify::minify_js(&bundle);
        }

        let dest_dir = config.dest_dir(crate::core::config::group_for(self.kind()));
        fs::create_dir_all(&dest_dir)
            .with_context(|| format!("Failed to create directory {}", dest_dir.display()))?;
        let dest = dest_dir.join(BUNDLE_NAME);
        fs::write(&dest, bundle).with_context(|| format!("Failed to write {}", dest.display()))?;

        Ok(StageReport::wrote(vec![dest]))
    }
}

/// Collects `.js` sources under the script root in lexicographic order so
/// the bundle is deterministic across runs and platforms.
fn find_sources(js_dir: &Path) -> Result<Vec<PathBuf>> {
    if !js_dir.exists() {
        return Ok(Vec::new());
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(js_dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", js_dir.display()))?;
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|e| e.to_str()) == Some("js")
        {
            sources.push(entry.into_path());
        }
    }
    sources.sort();
    Ok(sources)
}

/// # Structural Lint (`lint`)
///
/// Scans a source for unbalanced `()`/`{}`/`[]`, unterminated strings, and
/// unterminated block comments, skipping delimiter characters inside string
/// literals, template literals, and comments. Returns a human-readable
/// message on the first problem found.
fn lint(source: &str) -> std::result::Result<(), String> {
    let mut stack: Vec<char> = Vec::new();
    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' | '"' | '`' => {
                let quote = ch;
                let multiline = quote == '`';
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => {
                            chars.next();
                        }
                        '\n' if !multiline => break,
                        c if c == quote => {
                            closed = true;
                            break;
                        }
                        _ => {}
                    }
                }
                if !closed && !multiline {
                    return Err(format!("unterminated {quote} string"));
                }
                if !closed && multiline {
                    return Err("unterminated template literal".to_string());
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                let mut closed = false;
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        closed = true;
                        break;
                    }
                    prev = c;
                }
                if !closed {
                    return Err("unterminated block comment".to_string());
                }
            }
            '(' | '{' | '[' => stack.push(ch),
            ')' | '}' | ']' => {
                let expected = match ch {
                    ')' => '(',
                    '}' => '{',
                    _ => '[',
                };
                match stack.pop() {
                    Some(open) if open == expected => {}
                    Some(open) => {
                        return Err(format!("mismatched '{open}' closed by '{ch}'"));
                    }
                    None => return Err(format!("unexpected '{ch}'")),
                }
            }
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(format!("unclosed '{open}'"));
    }
    Ok(())
}
