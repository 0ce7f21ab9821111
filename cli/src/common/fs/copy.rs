//! # WebRS Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! This module provides the copy primitives the static asset stages are built
//! on: a glob-filtered tree copy (HTML and PHP files scattered through the
//! source tree) and a recursive directory copy (fonts and images, which move
//! wholesale). Both preserve paths relative to the source root.
//!
//! ## Architecture
//!
//! - `copy_glob` walks the source tree with `walkdir`, matches relative paths
//!   against a compiled `globset` pattern, and copies each hit to the same
//!   relative location under the destination root.
//! - `copy_dir_contents` delegates the recursive case to the `fs_extra`
//!   crate, then enumerates what landed so callers can report it.
//!
//! Failure policy: these are filesystem operations, so errors propagate as
//! fatal for the invoking task (they are never swallowed the way stage
//! compile errors are).
//!
use crate::core::error::Result;
use anyhow::Context;
use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Compiles a glob pattern into a matcher, with a readable error.
fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    Ok(Glob::new(pattern)
        .with_context(|| format!("Invalid glob pattern '{pattern}'"))?
        .compile_matcher())
}

/// # Glob-Filtered Tree Copy (`copy_glob`)
///
/// Copies every file under `src_root` whose path relative to `src_root`
/// matches `pattern`, to the same relative path under `dest_root`. Parent
/// directories are created as needed; existing files are overwritten.
///
/// A missing `src_root` is a no-op returning an empty list, matching the
/// original pipeline's allow-empty behavior.
///
/// ## Returns
///
/// The list of destination paths written, in walk order.
pub fn copy_glob(src_root: &Path, pattern: &str, dest_root: &Path) -> Result<Vec<PathBuf>> {
    if !src_root.exists() {
        debug!(
            "Source root {} does not exist; nothing to copy",
            src_root.display()
        );
        return Ok(Vec::new());
    }

    let matcher = compile_glob(pattern)?;
    let mut written = Vec::new();

    for entry in WalkDir::new(src_root) {
        let entry = entry.with_context(|| format!("Failed to walk {}", src_root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(src_root)
            .expect("walkdir yields paths under its root");
        if !matcher.is_match(rel) {
            continue;
        }

        let dest = dest_root.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::copy(entry.path(), &dest).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                entry.path().display(),
                dest.display()
            )
        })?;
        written.push(dest);
    }

    info!(
        "Copied {} file(s) matching '{}' from {} to {}",
        written.len(),
        pattern,
        src_root.display(),
        dest_root.display()
    );
    Ok(written)
}

/// # Recursive Directory Copy (`copy_dir_contents`)
///
/// Copies the contents of `source` into `target` (not the directory itself),
/// overwriting existing files. Used by the fonts and images stages, whose
/// path groups move whole directories verbatim.
///
/// A missing `source` is a no-op returning an empty list.
///
/// ## Returns
///
/// The list of destination paths written.
pub fn copy_dir_contents(source: &Path, target: &Path) -> Result<Vec<PathBuf>> {
    if !source.exists() {
        debug!(
            "Source directory {} does not exist; nothing to copy",
            source.display()
        );
        return Ok(Vec::new());
    }

    fs::create_dir_all(target)
        .with_context(|| format!("Failed to create directory {}", target.display()))?;

    let mut options = fs_extra::dir::CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;

    fs_extra::dir::copy(source, target, &options).map_err(|e| {
        anyhow::anyhow!(e).context(format!(
            "Failed to copy dir {} to {}",
            source.display(),
            target.display()
        ))
    })?;

    // fs_extra reports bytes, not paths; enumerate the source tree to tell
    // callers exactly what landed under the target.
    let mut written = Vec::new();
    for entry in WalkDir::new(source) {
        let entry = entry.with_context(|| format!("Failed to walk {}", source.display()))?;
        if entry.file_type().is_file() {
            let rel = entry
                .path()
                .strip_prefix(source)
                .expect("walkdir yields paths under its root");
            written.push(target.join(rel));
        }
    }

    info!(
        "Copied {} file(s) from {} to {}",
        written.len(),
        source.display(),
        target.display()
    );
    Ok(written)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copy_glob_preserves_relative_paths() -> Result<()> {
        let tmp = TempDir::new()?;
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dist");
        write(&src.join("index.html"), "<html></html>");
        write(&src.join("pages/about.html"), "<html>about</html>");
        write(&src.join("js/app.js"), "let x = 1;");

        let written = copy_glob(&src, "**/*.html", &dest)?;

        assert_eq!(written.len(), 2);
        assert_eq!(
            fs::read_to_string(dest.join("pages/about.html"))?,
            "<html>about</html>"
        );
        // Non-matching files are not copied.
        assert!(!dest.join("js/app.js").exists());
        Ok(())
    }

    #[test]
    fn test_copy_glob_missing_source_is_noop() -> Result<()> {
        let tmp = TempDir::new()?;
        let written = copy_glob(
            &tmp.path().join("nope"),
            "**/*.html",
            &tmp.path().join("dist"),
        )?;
        assert!(written.is_empty());
        Ok(())
    }

    #[test]
    fn test_copy_dir_contents() -> Result<()> {
        let tmp = TempDir::new()?;
        let fonts = tmp.path().join("fonts");
        let dest = tmp.path().join("dist/fonts");
        write(&fonts.join("site.woff2"), "woff");
        write(&fonts.join("nested/icons.woff2"), "icons");

        let written = copy_dir_contents(&fonts, &dest)?;

        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(dest.join("site.woff2"))?, "woff");
        assert_eq!(
            fs::read_to_string(dest.join("nested/icons.woff2"))?,
            "icons"
        );
        Ok(())
    }

    #[test]
    fn test_copy_dir_contents_overwrites() -> Result<()> {
        let tmp = TempDir::new()?;
        let fonts = tmp.path().join("fonts");
        let dest = tmp.path().join("out");
        write(&fonts.join("a.woff"), "new");
        write(&dest.join("a.woff"), "old");

        copy_dir_contents(&fonts, &dest)?;
        assert_eq!(fs::read_to_string(dest.join("a.woff"))?, "new");
        Ok(())
    }
}
