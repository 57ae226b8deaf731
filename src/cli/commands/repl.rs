//! repl command - Interactive simulator session

use std::io::{self, BufRead, Write};

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::engine::Session;
use crate::ui::output::{self, Verbosity};

const PROMPT: &str = "$ ";

/// Words handled by the prompt itself rather than the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meta {
    Exit,
    ShowState,
}

fn meta_command(line: &str) -> Option<Meta> {
    match line {
        "exit" | "quit" => Some(Meta::Exit),
        "state" => Some(Meta::ShowState),
        _ => None,
    }
}

/// Read commands from stdin until EOF or `exit`.
pub fn repl(ctx: &Context) -> Result<()> {
    let loaded = ctx.load_config()?;
    let verbosity = ctx.verbosity();
    let mut session = Session::new(loaded.config);

    output::print(
        format!(
            "Simulated repository ready on branch '{}'. Type git commands; \
             'state' shows the repository, 'exit' quits.",
            session.state().current
        ),
        verbosity,
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        if verbosity != Verbosity::Quiet {
            print!("{}", PROMPT);
            io::stdout().flush().context("Failed to flush prompt")?;
        }

        line.clear();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }

        match meta_command(line.trim()) {
            Some(Meta::Exit) => break,
            Some(Meta::ShowState) => {
                output::print(output::render_state(session.state()), verbosity);
            }
            None => {
                let outcome = session.submit(&line);
                output::print_outcome(outcome, verbosity);
            }
        }
    }

    tracing::debug!(commands = session.history().len(), "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_commands() {
        assert_eq!(meta_command("exit"), Some(Meta::Exit));
        assert_eq!(meta_command("quit"), Some(Meta::Exit));
        assert_eq!(meta_command("state"), Some(Meta::ShowState));
        assert_eq!(meta_command("git status"), None);
        assert_eq!(meta_command("clear"), None);
    }
}
