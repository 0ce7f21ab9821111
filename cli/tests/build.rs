//! # WebRS Pipeline Integration Tests
//!
//! File: cli/tests/build.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! End-to-end tests running the real `webrs` binary against scaffolded site
//! trees: full builds in both modes, per-stage runs, cleaning, and the
//! keep-serving-stale-output behavior on compile errors.
//!

// Declare and use the common module
mod common;
use common::*;
// Import necessary items directly
use std::fs;

/// A development build populates every destination in the output tree.
#[test]
fn test_build_produces_full_output_tree() {
    let tmp = site_fixture();
    webrs_cmd()
        .current_dir(tmp.path())
        .arg("build")
        .assert()
        .success();

    let dist = tmp.path().join("dist");
    assert!(dist.join("index.html").exists());
    assert!(dist.join("css/style.min.css").exists());
    assert!(dist.join("js/main.min.js").exists());
    assert!(dist.join("includes/header.php").exists());
    assert!(dist.join("fonts/site.woff2").exists());
    assert!(dist.join("imgs/logo.svg").exists());

    // The SCSS partial is an import target, not an entry point.
    assert!(!dist.join("css/_base.min.css").exists());
}

/// Production output is never larger than development output for the
/// transformed asset types.
#[test]
fn test_production_output_is_smaller() {
    let dev = site_fixture();
    webrs_cmd()
        .current_dir(dev.path())
        .arg("build")
        .assert()
        .success();

    let prod = site_fixture();
    webrs_cmd()
        .current_dir(prod.path())
        .args(["build", "--env", "production"])
        .assert()
        .success();

    let dev_css = fs::metadata(dev.path().join("dist/css/style.min.css")).unwrap();
    let prod_css = fs::metadata(prod.path().join("dist/css/style.min.css")).unwrap();
    assert!(prod_css.len() <= dev_css.len());

    let dev_js = fs::metadata(dev.path().join("dist/js/main.min.js")).unwrap();
    let prod_js = fs::metadata(prod.path().join("dist/js/main.min.js")).unwrap();
    assert!(prod_js.len() <= dev_js.len());
}

/// The bundle concatenates every script source.
#[test]
fn test_js_bundle_contains_all_sources() {
    let tmp = site_fixture();
    webrs_cmd()
        .current_dir(tmp.path())
        .arg("js")
        .assert()
        .success();

    let bundle = fs::read_to_string(tmp.path().join("dist/js/main.min.js")).unwrap();
    assert!(bundle.contains("const open"));
    assert!(bundle.contains("function init()"));
}

/// A per-stage command touches only its own destination.
#[test]
fn test_single_stage_writes_only_its_destination() {
    let tmp = site_fixture();
    webrs_cmd()
        .current_dir(tmp.path())
        .arg("css")
        .assert()
        .success();

    let dist = tmp.path().join("dist");
    assert!(dist.join("css/style.min.css").exists());
    assert!(!dist.join("index.html").exists());
    assert!(!dist.join("js").exists());
    assert!(!dist.join("fonts").exists());
}

/// `clean` removes the output tree; a second run is a successful no-op.
#[test]
fn test_clean_removes_output_tree() {
    let tmp = site_fixture();
    webrs_cmd()
        .current_dir(tmp.path())
        .arg("build")
        .assert()
        .success();
    assert!(tmp.path().join("dist").exists());

    webrs_cmd()
        .current_dir(tmp.path())
        .arg("clean")
        .assert()
        .success();
    assert!(!tmp.path().join("dist").exists());

    webrs_cmd()
        .current_dir(tmp.path())
        .arg("clean")
        .assert()
        .success();
}

/// A broken SCSS save exits successfully and leaves the previous stylesheet
/// in place, so a dev session keeps serving the last good output.
#[test]
fn test_scss_compile_error_keeps_previous_output() {
    let tmp = site_fixture();
    webrs_cmd()
        .current_dir(tmp.path())
        .arg("css")
        .assert()
        .success();
    let good = fs::read_to_string(tmp.path().join("dist/css/style.min.css")).unwrap();

    fs::write(
        tmp.path().join("src/scss/style.scss"),
        "body { margin: ; }\n",
    )
    .unwrap();

    webrs_cmd()
        .current_dir(tmp.path())
        .arg("css")
        .assert()
        .success();

    let after = fs::read_to_string(tmp.path().join("dist/css/style.min.css")).unwrap();
    assert_eq!(good, after);
}

/// A broken script save behaves the same way: lint rejects it, the previous
/// bundle survives, and the exit status stays zero.
#[test]
fn test_js_lint_error_keeps_previous_bundle() {
    let tmp = site_fixture();
    webrs_cmd()
        .current_dir(tmp.path())
        .arg("js")
        .assert()
        .success();
    let good = fs::read_to_string(tmp.path().join("dist/js/main.min.js")).unwrap();

    fs::write(
        tmp.path().join("src/js/menu.js"),
        "function broken( { return 1; }\n",
    )
    .unwrap();

    webrs_cmd()
        .current_dir(tmp.path())
        .arg("js")
        .assert()
        .success();

    let after = fs::read_to_string(tmp.path().join("dist/js/main.min.js")).unwrap();
    assert_eq!(good, after);
}

/// Development HTML gets the reload snippet; production HTML is verbatim.
#[test]
fn test_reload_snippet_only_in_development() {
    let tmp = site_fixture();
    webrs_cmd()
        .current_dir(tmp.path())
        .arg("html")
        .assert()
        .success();
    let dev_html = fs::read_to_string(tmp.path().join("dist/index.html")).unwrap();
    assert!(dev_html.contains("/__webrs/client.js"));

    webrs_cmd()
        .current_dir(tmp.path())
        .args(["html", "--env", "production"])
        .assert()
        .success();
    let prod_html = fs::read_to_string(tmp.path().join("dist/index.html")).unwrap();
    assert!(!prod_html.contains("/__webrs/client.js"));
    assert_eq!(
        prod_html,
        fs::read_to_string(tmp.path().join("src/index.html")).unwrap()
    );
}

/// Settings merge: `.webrs.toml` beats defaults, explicit flags beat the file.
#[test]
fn test_config_file_and_flag_precedence() {
    let tmp = site_fixture();
    fs::write(tmp.path().join(".webrs.toml"), "dist = \"public\"\n").unwrap();

    webrs_cmd()
        .current_dir(tmp.path())
        .arg("build")
        .assert()
        .success();
    assert!(tmp.path().join("public/index.html").exists());
    assert!(!tmp.path().join("dist").exists());

    webrs_cmd()
        .current_dir(tmp.path())
        .args(["build", "--dist", "out"])
        .assert()
        .success();
    assert!(tmp.path().join("out/index.html").exists());
}
