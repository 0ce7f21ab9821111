//! # WebRS Main Entry Point
//!
//! File: cli/src/main.rs
//! Repository: https://github.com/webrs-tools/webrs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the WebRS CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading and merging the build configuration
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! Each command maps to a handler in `commands/`; every handler receives the
//! same merged `BuildConfig`, so `webrs css --env production` and a
//! production `webrs build` agree on what "production" means. All errors are
//! propagated to this level for consistent handling.
//!
//! ## Examples
//!
//! Basic WebRS usage:
//!
//! ```bash
//! # One-shot production build
//! webrs build --env production
//!
//! # Serve with live reload on a different port, with debug logging
//! webrs -vv dev --port 8080
//!
//! # Rebuild only the stylesheets
//! webrs css
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use webrs::commands;
use webrs::core::config::{self, AssetKind, CliOverrides};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "webrs",
    about = "🕸️ WebRS ⚙️: Front-End Asset Pipeline & Dev Server",
    long_about = "Compile SCSS, bundle scripts, copy static assets, and serve the result\n\
                  with live reload. Runs `dev` when invoked without a command.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    overrides: CliOverrides,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Clean the output tree, then run every asset stage.
    #[command(alias = "b")]
    Build,
    /// Remove the output tree.
    Clean,
    /// Build, then serve with live reload and rebuild on change.
    #[command(alias = "d", alias = "default")]
    Dev,
    /// Copy HTML pages (with the reload snippet in development).
    Html,
    /// Compile the SCSS tree to CSS.
    Css,
    /// Lint and bundle the scripts.
    Js,
    /// Copy PHP sources.
    Php,
    /// Copy the font files.
    Fonts,
    /// Copy the image files.
    Images,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match config::load_config(&cli.overrides) {
        Ok(config) => match cli.command.unwrap_or(Commands::Dev) {
            Commands::Build => commands::build::handle_build(config).await,
            Commands::Clean => commands::clean::handle_clean(config).await,
            Commands::Dev => commands::dev::handle_dev(config).await,
            Commands::Html => commands::stage::handle_stage(AssetKind::Html, config).await,
            Commands::Css => commands::stage::handle_stage(AssetKind::Styles, config).await,
            Commands::Js => commands::stage::handle_stage(AssetKind::Scripts, config).await,
            Commands::Php => commands::stage::handle_stage(AssetKind::Php, config).await,
            Commands::Fonts => commands::stage::handle_stage(AssetKind::Fonts, config).await,
            Commands::Images => commands::stage::handle_stage(AssetKind::Images, config).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn webrs_cmd() -> Command {
        Command::cargo_bin("webrs").expect("Failed to find webrs binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        webrs_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        webrs_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
