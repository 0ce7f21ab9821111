//! # WebRS CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files in `cli/tests/`. Each
//! `.rs` file here is compiled as a separate test crate running the real
//! `webrs` binary, so the site scaffold and command constructor live in one
//! place.
//!

// Allow potentially unused code in this common module, as different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// # Get WebRS Command (`webrs_cmd`)
///
/// Creates an `assert_cmd::Command` pointing at the compiled `webrs` binary
/// for the current test run.
///
/// ## Panics
/// Panics if the `webrs` binary cannot be found via `Command::cargo_bin`.
pub fn webrs_cmd() -> Command {
    Command::cargo_bin("webrs").expect("Failed to find webrs binary for testing")
}

/// # Scaffold a Site Source Tree (`scaffold_site`)
///
/// Creates a minimal but complete source tree under `root/src`: an HTML
/// page, an SCSS entry plus partial, two scripts, a PHP include, and one
/// file each under `fonts/` and `imgs/`.
pub fn scaffold_site(root: &Path) {
    let src = root.join("src");
    for dir in ["scss", "js", "fonts", "imgs", "includes"] {
        fs::create_dir_all(src.join(dir)).expect("Failed to scaffold source tree");
    }

    fs::write(
        src.join("index.html"),
        "<html><head><link rel=\"stylesheet\" href=\"css/style.min.css\"></head>\
         <body><script src=\"js/main.min.js\"></script></body></html>",
    )
    .unwrap();
    fs::write(
        src.join("scss/style.scss"),
        "@use 'base';\nbody {\n  margin: 0;\n  user-select: none;\n}\n",
    )
    .unwrap();
    fs::write(src.join("scss/_base.scss"), "html { font-size: 16px; }\n").unwrap();
    fs::write(src.join("js/menu.js"), "const open = false; // menu state\n").unwrap();
    fs::write(src.join("js/site.js"), "function init() { return 1; }\n").unwrap();
    fs::write(src.join("includes/header.php"), "<?php echo 'header'; ?>\n").unwrap();
    fs::write(src.join("fonts/site.woff2"), b"\x77\x4f\x46\x32fake").unwrap();
    fs::write(src.join("imgs/logo.svg"), "<svg></svg>").unwrap();
}

/// Temp dir with a scaffolded site, ready for `webrs` runs with
/// `.current_dir(...)`.
pub fn site_fixture() -> TempDir {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    scaffold_site(tmp.path());
    tmp
}
