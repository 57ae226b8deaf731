//! cli
//!
//! Command-line interface layer for gitsim.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration on demand
//! - Delegate to command handlers, which drive an [`crate::engine::Session`]
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`commands`]. All repository changes flow through the engine; the CLI only
//! decides where input comes from and where output goes.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};
use std::path::PathBuf;

use crate::core::config::{Config, ConfigLoadResult};
use crate::ui::output::Verbosity;

/// Settings shared by every command, taken from the global flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Explicit `--config` path.
    pub config_path: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (errors only).
    pub quiet: bool,
}

impl Context {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Load configuration from `--config` or the default search path.
    pub fn load_config(&self) -> Result<ConfigLoadResult> {
        Config::load(self.config_path.as_deref()).context("Failed to load config")
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run(cli: Cli) -> Result<()> {
    let ctx = Context {
        config_path: cli.config.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command.unwrap_or(args::Command::Repl), &ctx)
}
