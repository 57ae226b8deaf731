//! engine::suggest
//!
//! Completions for a partially typed line.
//!
//! Suggestions are recomputed from scratch on every keystroke and never
//! touch the repository. Each suggestion is a full line: the text typed so
//! far with the word under the cursor completed.

use crate::core::state::RepoState;

use super::catalog::{self, CATALOG, CLEAR};
use super::command::Subcommand;

/// Revisions offered ahead of raw commit ids.
const RELATIVE_REVISIONS: [&str; 2] = ["HEAD", "HEAD~1"];

/// Suggest completions for `partial` against `state`.
///
/// # Example
///
/// ```
/// use gitsim::core::config::Config;
/// use gitsim::core::state::RepoState;
/// use gitsim::engine::suggest;
///
/// let state = RepoState::new(&Config::default());
/// assert_eq!(suggest("git sta", &state), ["git status", "git stash"].map(String::from));
/// assert_eq!(suggest("git checkout m", &state), vec!["git checkout main".to_string()]);
/// assert!(suggest("", &state).is_empty());
/// ```
pub fn suggest(partial: &str, state: &RepoState) -> Vec<String> {
    let input = partial.trim_start();
    if input.is_empty() {
        return Vec::new();
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let (word_index, current) = if input.ends_with(char::is_whitespace) {
        (tokens.len(), "")
    } else {
        (tokens.len() - 1, tokens[tokens.len() - 1])
    };
    let prefix = &input[..input.len() - current.len()];

    let candidates: Vec<String> = match word_index {
        0 => {
            let lower = input.to_lowercase();
            return catalog::all_names()
                .into_iter()
                .chain(std::iter::once(CLEAR.to_string()))
                .filter(|name| name.starts_with(&lower))
                .collect();
        }
        _ if tokens[0] != "git" => return Vec::new(),
        1 => CATALOG
            .iter()
            .flat_map(|def| {
                std::iter::once(def.subcommand.name())
                    .chain(def.subcommand.aliases().iter().copied())
            })
            .map(String::from)
            .collect(),
        _ => match Subcommand::from_word(tokens[1]) {
            Some(sub) => {
                let previous = &tokens[2..word_index];
                catalog::definition(sub)
                    .options
                    .iter()
                    .map(|opt| opt.option.to_string())
                    .chain(arguments(sub, previous, state))
                    .collect()
            }
            None => return Vec::new(),
        },
    };

    let needle = current.to_lowercase();
    let mut out: Vec<String> = Vec::new();
    for candidate in candidates {
        if candidate.to_lowercase().starts_with(&needle) {
            let line = format!("{}{}", prefix, candidate);
            if !out.contains(&line) {
                out.push(line);
            }
        }
    }
    out
}

/// Argument candidates for `sub`, given the arguments already typed.
fn arguments(sub: Subcommand, previous: &[&str], state: &RepoState) -> Vec<String> {
    let branches = || state.branches.iter().map(|b| b.name.to_string());
    let revisions = || {
        RELATIVE_REVISIONS
            .iter()
            .map(|r| r.to_string())
            .chain(state.commits.iter().map(|c| c.id.to_string()))
    };

    match sub {
        Subcommand::Checkout => branches().chain(revisions()).collect(),
        Subcommand::Merge | Subcommand::Rebase => branches().collect(),
        Subcommand::Branch => match previous.last() {
            Some(&("-d" | "-D" | "--delete")) => branches().collect(),
            _ => Vec::new(),
        },
        Subcommand::Reset => revisions().collect(),
        Subcommand::Add => state.working_directory.clone(),
        _ => Vec::new(),
    }
}
