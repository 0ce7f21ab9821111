//! # WebRS Source Watcher
//!
//! File: cli/src/commands/dev/watcher.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! Watches the source tree and re-runs the owning stage for each change.
//! Events are debounced so a burst of writes (editor save, `git checkout`)
//! triggers one rebuild per affected stage rather than one per file, and
//! changed paths are mapped to stages through the same path groups the
//! build uses.
//!
//! Watcher errors for individual events are logged and skipped; the loop
//! keeps running. Only a failure to establish the watch itself is fatal.
//!
use crate::common::reload::ReloadChannel;
use crate::core::config::{AssetKind, BuildConfig};
use crate::core::error::{Result, WebrsError};
use crate::pipeline::stages;
use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use std::collections::BTreeSet;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Quiet window before a burst of filesystem events is acted on.
const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// # Watch Loop (`watch_loop`)
///
/// Blocks forever (until the process exits) watching `config.src`. Each
/// debounced batch of events is collapsed into the set of affected asset
/// kinds, and each kind's stage is re-run with the reload channel attached
/// so connected browsers refresh.
///
/// ## Errors
///
/// Returns an error only if the watch on the source root cannot be
/// established. Stage failures inside the loop are logged, not propagated:
/// a broken save must never kill the dev session.
pub fn watch_loop(config: BuildConfig, reload: ReloadChannel) -> Result<()> {
    let mut config = config;
    resolve_watch_root(&mut config);

    let (tx, rx) = mpsc::channel();

    let mut debouncer = new_debouncer(DEBOUNCE_WINDOW, tx).map_err(|e| {
        anyhow::Error::new(WebrsError::Watch(format!(
            "failed to create watcher: {e}"
        )))
    })?;

    debouncer
        .watcher()
        .watch(&config.src, RecursiveMode::Recursive)
        .map_err(|e| {
            anyhow::Error::new(WebrsError::Watch(format!(
                "failed to watch {}: {e}",
                config.src.display()
            )))
        })?;

    info!("Watching {} for changes", config.src.display());

    for batch in rx {
        let events = match batch {
            Ok(events) => events,
            Err(e) => {
                warn!("Watch error, skipping batch: {}", e);
                continue;
            }
        };

        let kinds: BTreeSet<AssetKind> = events
            .iter()
            .filter_map(|event| {
                let kind = config.kind_for_change(&event.path);
                if kind.is_none() {
                    debug!("Ignoring change outside path groups: {}", event.path.display());
                }
                kind
            })
            .collect();

        for kind in kinds {
            info!("Change detected, re-running '{}' stage", kind);
            let stage = stages::stage_for(kind);
            if let Err(e) = stages::run_stage(stage.as_ref(), &config, Some(&reload)) {
                error!("Stage '{}' failed after change: {:#}", kind, e);
            }
        }
    }

    Ok(())
}

/// Resolves the watch root to its canonical absolute form when possible.
/// Watch backends report canonical absolute event paths (symlinks
/// resolved), and `kind_for_change` strips the root as a prefix, so the
/// two must be in the same form. A root that cannot be canonicalized
/// (not yet created) is left as configured.
fn resolve_watch_root(config: &mut BuildConfig) {
    match config.src.canonicalize() {
        Ok(canonical) => config.src = canonical,
        Err(e) => debug!(
            "Could not canonicalize watch root {}: {}",
            config.src.display(),
            e
        ),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AssetKind;
    use std::fs;
    use tempfile::TempDir;

    /// The debounce window stays well under a second so edits feel live.
    #[test]
    fn test_debounce_window_is_subsecond() {
        assert!(DEBOUNCE_WINDOW < Duration::from_secs(1));
    }

    /// After root resolution, event paths in the watcher's canonical form
    /// map back to their owning stage — symlinked temp roots included.
    #[test]
    fn test_resolved_root_maps_canonical_event_paths() -> Result<()> {
        let tmp = TempDir::new()?;
        fs::create_dir_all(tmp.path().join("site/src/scss"))?;

        let mut config = BuildConfig {
            src: tmp.path().join("site/src"),
            ..BuildConfig::default()
        };
        resolve_watch_root(&mut config);
        assert!(config.src.is_absolute());

        // What the watcher would report for a save under the canonical root.
        let event_path = config.src.join("scss/style.scss");
        assert_eq!(config.kind_for_change(&event_path), Some(AssetKind::Styles));
        Ok(())
    }

    /// A missing root is left untouched so the watch attempt itself can
    /// report the real error.
    #[test]
    fn test_missing_root_left_as_configured() {
        let mut config = BuildConfig {
            src: std::path::PathBuf::from("no-such-tree"),
            ..BuildConfig::default()
        };
        resolve_watch_root(&mut config);
        assert_eq!(config.src, std::path::PathBuf::from("no-such-tree"));
    }
}
