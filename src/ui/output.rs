//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Rendering and printing are split: `render_*` functions build strings and
//! are tested directly, the printing helpers only decide where the text goes
//! and respect the quiet flag. Errors always go to stderr.

use std::fmt::Display;

use crate::core::state::RepoState;
use crate::engine::catalog::{CommandDefinition, CATALOG, CLEAR, CLEAR_DESCRIPTION};
use crate::engine::Outcome;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - errors only
    Quiet,
    /// Normal mode - explanations and suggestions
    Normal,
    /// Debug mode - normal output plus engine tracing on stderr
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a hint (respects quiet mode).
pub fn hint(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("hint: {}", message);
    }
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print what a submitted line did.
pub fn print_outcome(outcome: &Outcome, verbosity: Verbosity) {
    match outcome {
        Outcome::Empty | Outcome::Cleared => {}
        Outcome::Applied {
            explanation,
            suggestions,
        } => {
            print(explanation, verbosity);
            if !suggestions.is_empty() {
                print(format_list(suggestions, "  "), verbosity);
            }
        }
        Outcome::Rejected { error: msg, suggestions } => {
            error(msg);
            if !suggestions.is_empty() {
                hint("did you mean one of these?", verbosity);
                if verbosity != Verbosity::Quiet {
                    eprintln!("{}", format_list(suggestions, "  "));
                }
            }
        }
    }
}

/// Textual summary of a repository snapshot.
///
/// ```text
/// HEAD: main at c2
///
/// Branches:
/// * main     c2
///   feature  c1
///
/// Commits:
///   c1  Initial commit
/// > c2  add login  (parent c1)  [main]
///
/// Stage: login.rs
/// Working directory: (clean)
/// ```
pub fn render_state(state: &RepoState) -> String {
    let head = state
        .head_commit()
        .map(|c| c.id.to_string())
        .unwrap_or_else(|| "?".to_string());

    let mut out = format!("HEAD: {} at {}\n\nBranches:\n", state.current, head);

    let name_width = state
        .branches
        .iter()
        .map(|b| b.name.as_str().len())
        .max()
        .unwrap_or(0);
    let current = state.current.branch();
    for branch in &state.branches {
        let marker = if Some(&branch.name) == current { '*' } else { ' ' };
        out.push_str(&format!(
            "{} {:<width$}  {}\n",
            marker,
            branch.name.as_str(),
            branch.head,
            width = name_width
        ));
    }

    out.push_str("\nCommits:\n");
    let id_width = state
        .commits
        .iter()
        .map(|c| c.id.as_str().len())
        .max()
        .unwrap_or(0);
    for commit in &state.commits {
        let marker = if commit.is_head { '>' } else { ' ' };
        let mut line = format!(
            "{} {:<width$}  {}",
            marker,
            commit.id.as_str(),
            commit.message,
            width = id_width
        );

        let parents: Vec<String> = commit.parents().map(|p| p.to_string()).collect();
        match parents.len() {
            0 => {}
            1 => line.push_str(&format!("  (parent {})", parents[0])),
            _ => line.push_str(&format!("  (parents {})", parents.join(", "))),
        }

        let labels: Vec<&str> = state
            .branches
            .iter()
            .filter(|b| b.head == commit.id)
            .map(|b| b.name.as_str())
            .collect();
        if !labels.is_empty() {
            line.push_str(&format!("  [{}]", labels.join(", ")));
        }

        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str(&format!("\nStage: {}\n", join_or(&state.stage, "(empty)")));
    out.push_str(&format!(
        "Working directory: {}",
        join_or(&state.working_directory, "(clean)")
    ));
    out
}

fn join_or(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}

/// The supported command catalog with descriptions and options.
pub fn render_catalog() -> String {
    let width = CATALOG
        .iter()
        .map(|def| def.name().len())
        .chain(std::iter::once(CLEAR.len()))
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = Vec::new();
    for def in CATALOG {
        lines.push(format!("{:<width$}  {}", def.name(), def.description, width = width));
        lines.extend(render_options(def));
    }
    lines.push(format!("{:<width$}  {}", CLEAR, CLEAR_DESCRIPTION, width = width));
    lines.join("\n")
}

fn render_options(def: &CommandDefinition) -> impl Iterator<Item = String> + '_ {
    def.options
        .iter()
        .map(|opt| format!("    {:<14}{}", opt.option, opt.description))
}
