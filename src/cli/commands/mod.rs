//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Gathers its input (terminal, file, arguments)
//! 2. Feeds it to the engine
//! 3. Formats and displays output through [`crate::ui::output`]
//!
//! Handlers never touch a repository snapshot directly.

mod completion;
mod config_cmd;
mod help;
mod repl;
mod run;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use help::{commands, suggest};
pub use repl::repl;
pub use run::run;

use super::args::{Command, ConfigAction};
use super::Context;
use anyhow::Result;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Repl => repl(ctx),
        Command::Run {
            file,
            commands,
            json,
            strict,
        } => run(ctx, file.as_deref(), &commands, json, strict),
        Command::Suggest { partial } => suggest(ctx, &partial),
        Command::Commands => help::commands(ctx),
        Command::Completion { shell } => completion(shell),
        Command::Config { action } => match action {
            ConfigAction::Show => config_cmd::show(ctx),
            ConfigAction::Init { force } => config_cmd::init(ctx, force),
        },
    }
}
