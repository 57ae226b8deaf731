//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this configuration file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Errors only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitsim - Learn Git by watching a simulated repository change
#[derive(Parser, Debug)]
#[command(name = "gitsim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this configuration file instead of searching for one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Defaults to `repl` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive simulator session
    #[command(
        name = "repl",
        long_about = "Start an interactive simulator session.\n\n\
            Type git commands at the `$ ` prompt and watch the simulated \
            repository change. Nothing on disk is touched. `clear` wipes the \
            session history, `exit` or `quit` ends the session.",
        after_help = "\
WORKFLOW EXAMPLES:
    $ git checkout -b feature
    $ git add login.rs
    $ git commit -m \"add login\"
    $ git checkout main
    $ git merge feature"
    )]
    Repl,

    /// Run simulator commands from a file, arguments or stdin
    #[command(
        name = "run",
        long_about = "Run simulator commands non-interactively.\n\n\
            Commands come from -c (repeatable), else from FILE, else from \
            stdin, one per line. Blank lines and lines starting with '#' are \
            skipped. Each outcome is printed as it happens.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Replay a lesson
    gitsim run lesson.txt

    # One-off commands, final state as JSON
    gitsim run -c 'git branch feature' -c 'git checkout feature' --json

    # Fail the pipeline if any command is rejected
    gitsim run --strict lesson.txt"
    )]
    Run {
        /// File with one command per line
        file: Option<PathBuf>,

        /// Command to run (repeatable)
        #[arg(short = 'c', long = "command", value_name = "CMD")]
        commands: Vec<String>,

        /// Print the final repository state as JSON
        #[arg(long)]
        json: bool,

        /// Exit with an error if any command is rejected
        #[arg(long)]
        strict: bool,
    },

    /// Show suggestions for a partially typed command
    Suggest {
        /// Partial input, e.g. "git ch"
        partial: String,
    },

    /// List the supported git commands
    Commands,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for gitsim.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    gitsim completion bash >> ~/.bashrc

    # Zsh
    gitsim completion zsh > ~/.zfunc/_gitsim

    # Fish
    gitsim completion fish > ~/.config/fish/completions/gitsim.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
