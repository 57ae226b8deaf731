//! run command - Replay simulator commands non-interactively

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::engine::Session;
use crate::ui::output::{self, Verbosity};

/// Lines worth submitting: non-blank and not `#` comments.
fn script_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Run commands from `-c` arguments, a file, or stdin, in that order of
/// preference.
pub fn run(
    ctx: &Context,
    file: Option<&Path>,
    commands: &[String],
    json: bool,
    strict: bool,
) -> Result<()> {
    let script = if !commands.is_empty() {
        commands.join("\n")
    } else if let Some(path) = file {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read commands from {}", path.display()))?
    } else {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read commands from stdin")?;
        text
    };

    let loaded = ctx.load_config()?;
    let mut session = Session::new(loaded.config);

    // Keep stdout clean for the JSON document.
    let verbosity = if json {
        Verbosity::Quiet
    } else {
        ctx.verbosity()
    };

    let mut rejected = 0usize;
    for line in script_lines(&script) {
        output::print(format!("$ {}", line), verbosity);
        let outcome = session.submit(line);
        if outcome.is_rejected() {
            rejected += 1;
        }
        output::print_outcome(outcome, verbosity);
    }

    if json {
        let doc = serde_json::to_string_pretty(session.state())
            .context("Failed to serialize repository state")?;
        println!("{}", doc);
    }

    if strict && rejected > 0 {
        bail!("{} command(s) rejected", rejected);
    }
    Ok(())
}
