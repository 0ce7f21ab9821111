//! # WebRS Build Configuration
//!
//! File: cli/src/core/config.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! This module handles configuration loading, merging, and validation for the
//! asset pipeline and dev server. It combines settings from:
//! 1. Command-line arguments (highest priority)
//! 2. A local configuration file `.webrs.toml` (if present)
//! 3. Default values (lowest priority)
//!
//! It also owns the static **path groups**: the association between one asset
//! type and its source glob plus destination directory. Every stage reads
//! exactly one group, and no stage writes outside its group's destination.
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! # .webrs.toml
//! env = "production"
//! src = "src"
//! dist = "dist"
//! host = "127.0.0.1"
//! port = 3000
//! ```
//!
use crate::core::error::{Result, WebrsError};
use anyhow::Context;
use serde::Deserialize;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::{env, fs};
use tracing::{debug, info, warn};

/// The expected name for the project configuration file.
const CONFIG_FILE_NAME: &str = ".webrs.toml";

/// # Environment Mode (`EnvMode`)
///
/// The binary development/production switch. Set once at process start from
/// `--env` (or the config file) and never mutated; it only gates whether the
/// minification sub-steps of the style and script stages run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvMode {
    Development,
    Production,
}

impl EnvMode {
    /// True when minification sub-steps should run.
    pub fn minify(self) -> bool {
        matches!(self, EnvMode::Production)
    }
}

/// # Asset Kind (`AssetKind`)
///
/// One variant per asset transform stage. Doubles as the key the file watcher
/// uses to map a changed path back to the stage that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetKind {
    Html,
    Styles,
    Scripts,
    Php,
    Fonts,
    Images,
}

impl AssetKind {
    /// Stable lowercase name, used for task names and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Html => "html",
            AssetKind::Styles => "styles",
            AssetKind::Scripts => "scripts",
            AssetKind::Php => "php",
            AssetKind::Fonts => "fonts",
            AssetKind::Images => "images",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// # Path Group (`PathGroup`)
///
/// A named association of source glob and destination subdirectory for one
/// asset type. Immutable once defined; read by exactly one stage.
#[derive(Debug, Clone, Copy)]
pub struct PathGroup {
    pub kind: AssetKind,
    /// Glob pattern, relative to the source root.
    pub pattern: &'static str,
    /// Destination subdirectory, relative to the output root ("" = root).
    pub dest: &'static str,
}

/// The full set of path groups, one per asset transform stage.
pub const PATH_GROUPS: &[PathGroup] = &[
    PathGroup {
        kind: AssetKind::Html,
        pattern: "**/*.html",
        dest: "",
    },
    PathGroup {
        kind: AssetKind::Styles,
        pattern: "scss/**/*.scss",
        dest: "css",
    },
    PathGroup {
        kind: AssetKind::Scripts,
        pattern: "js/**/*.js",
        dest: "js",
    },
    PathGroup {
        kind: AssetKind::Php,
        pattern: "**/*.php",
        dest: "",
    },
    PathGroup {
        kind: AssetKind::Fonts,
        pattern: "fonts/**/*",
        dest: "fonts",
    },
    PathGroup {
        kind: AssetKind::Images,
        pattern: "imgs/**/*",
        dest: "imgs",
    },
];

/// # Effective Build Configuration (`BuildConfig`)
///
/// Holds the final, consolidated settings for the pipeline and dev server
/// after merging command-line arguments with any `.webrs.toml` settings.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Development or production mode (gates minification).
    pub env: EnvMode,

    /// Root of the source tree (default `src`).
    pub src: PathBuf,

    /// Root of the output tree (default `dist`).
    pub dist: PathBuf,

    /// Network address the dev server binds to.
    pub host: IpAddr,

    /// Port the dev server listens on.
    pub port: u16,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            env: EnvMode::Development,
            src: PathBuf::from("src"),
            dist: PathBuf::from("dist"),
            host: IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
            port: 3000,
        }
    }
}

/// # Explicit CLI Overrides (`CliOverrides`)
///
/// The subset of settings the user can override on the command line. Every
/// field is optional so the merge logic can tell "explicitly set" apart from
/// "left at default" — an explicit flag always beats the config file.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CliOverrides {
    /// Build environment; `production` enables the minification sub-steps.
    #[arg(long, global = true, value_enum)]
    pub env: Option<EnvMode>,

    /// Source tree root (overrides the config file).
    #[arg(long, global = true)]
    pub src: Option<PathBuf>,

    /// Output tree root (overrides the config file).
    #[arg(long, global = true)]
    pub dist: Option<PathBuf>,

    /// Dev server port (overrides the config file).
    #[arg(long, global = true)]
    pub port: Option<u16>,
}

/// # Configuration from File (`FileConfig`)
///
/// A helper struct used solely for deserializing `.webrs.toml`. All fields
/// are optional so users specify only the settings they want to override.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    env: Option<EnvMode>,
    src: Option<PathBuf>,
    dist: Option<PathBuf>,
    host: Option<String>, // Read as string to handle parse errors gracefully.
    port: Option<u16>,
}

/// # Load and Merge Configuration (`load_config`)
///
/// Determines the effective `BuildConfig`: defaults, overridden by the
/// `.webrs.toml` found in the current working directory (if any), overridden
/// by explicitly-set CLI flags.
///
/// ## Errors
///
/// Returns an error if the current working directory cannot be determined,
/// or if a config file exists but cannot be read or parsed.
pub fn load_config(overrides: &CliOverrides) -> Result<BuildConfig> {
    let cwd = env::current_dir().context("Failed to get current working directory")?;
    let file_config = load_config_from_dir(&cwd)?.unwrap_or_default();

    let defaults = BuildConfig::default();

    // Host comes only from the file (rarely changed); fall back to default
    // on a malformed address rather than failing the whole invocation.
    let host = match file_config.host {
        Some(ref host_str) => host_str.parse().unwrap_or_else(|e| {
            warn!(
                "Invalid host '{}' in {} ({}), using default {}",
                host_str, CONFIG_FILE_NAME, e, defaults.host
            );
            defaults.host
        }),
        None => defaults.host,
    };

    let config = BuildConfig {
        env: overrides
            .env
            .or(file_config.env)
            .unwrap_or(defaults.env),
        src: overrides
            .src
            .clone()
            .or(file_config.src)
            .unwrap_or(defaults.src),
        dist: overrides
            .dist
            .clone()
            .or(file_config.dist)
            .unwrap_or(defaults.dist),
        host,
        port: overrides
            .port
            .or(file_config.port)
            .unwrap_or(defaults.port),
    };

    debug!("Effective build config: {:?}", config);
    Ok(config)
}

/// Attempts to find, read, and parse a `.webrs.toml` file in `search_dir`.
/// A missing file is not an error; a present-but-invalid file is.
fn load_config_from_dir(search_dir: &Path) -> Result<Option<FileConfig>> {
    let config_path = search_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() || !config_path.is_file() {
        debug!("No config file found at {}", config_path.display());
        return Ok(None);
    }

    info!("Loading configuration from {}", config_path.display());

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let file_config: FileConfig = toml::from_str(&content).map_err(|e| {
        WebrsError::Config(format!(
            "Failed to parse config file {}: {e}",
            config_path.display()
        ))
    })?;

    Ok(Some(file_config))
}

impl BuildConfig {
    /// Destination directory for a path group, joined under the output root.
    pub fn dest_dir(&self, group: &PathGroup) -> PathBuf {
        if group.dest.is_empty() {
            self.dist.clone()
        } else {
            self.dist.join(group.dest)
        }
    }

    /// Source directory holding the SCSS tree.
    pub fn scss_dir(&self) -> PathBuf {
        self.src.join("scss")
    }

    /// Source directory holding the script sources.
    pub fn js_dir(&self) -> PathBuf {
        self.src.join("js")
    }

    /// # Map a Changed Path to its Stage (`kind_for_change`)
    ///
    /// Resolves a filesystem path (as reported by the watcher) to the asset
    /// kind whose stage must re-run. Paths outside the source tree, and
    /// files no group claims, return `None`.
    ///
    /// Watchers report absolute paths while `src` is usually a relative
    /// root like `src`, so the prefix check also tries the root joined
    /// onto the current working directory.
    pub fn kind_for_change(&self, path: &Path) -> Option<AssetKind> {
        let rel = self.relative_to_src(path)?;
        let mut components = rel.components();
        let first = components.next()?.as_os_str().to_string_lossy().to_string();

        match first.as_str() {
            "scss" => return Some(AssetKind::Styles),
            "js" => return Some(AssetKind::Scripts),
            "fonts" => return Some(AssetKind::Fonts),
            "imgs" => return Some(AssetKind::Images),
            _ => {}
        }

        match rel.extension().and_then(|e| e.to_str()) {
            Some("html") => Some(AssetKind::Html),
            Some("php") => Some(AssetKind::Php),
            _ => None,
        }
    }

    /// Strips the source root off `path`, whichever form the two are in:
    /// direct prefix first, then the relative root resolved against the
    /// current working directory.
    fn relative_to_src<'p>(&self, path: &'p Path) -> Option<&'p Path> {
        if let Ok(rel) = path.strip_prefix(&self.src) {
            return Some(rel);
        }
        if self.src.is_relative() {
            let absolute = env::current_dir().ok()?.join(&self.src);
            if let Ok(rel) = path.strip_prefix(&absolute) {
                return Some(rel);
            }
        }
        None
    }
}

/// Looks up the path group owning a given asset kind.
pub fn group_for(kind: AssetKind) -> &'static PathGroup {
    PATH_GROUPS
        .iter()
        .find(|g| g.kind == kind)
        .expect("every asset kind has a path group")
}

// --- Unit Tests ---
