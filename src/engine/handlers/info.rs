//! engine::handlers::info
//!
//! `git init` and `git status`.

use crate::core::config::Config;
use crate::core::state::{HeadRef, RepoState};
use crate::engine::exec::Transition;

/// Replace everything with the canonical fresh repository.
pub(crate) fn init(config: &Config) -> Transition {
    Transition::new(
        RepoState::new(config),
        format!(
            "git init: initialized a new repository with a '{}' branch.",
            config.default_branch()
        ),
    )
}

pub(crate) fn status(state: &RepoState) -> Transition {
    Transition::unchanged(state, format_status(state))
}

/// Render `git status` output for a snapshot.
pub(crate) fn format_status(state: &RepoState) -> String {
    let mut out = match &state.current {
        HeadRef::Branch(name) => format!("On branch {}", name),
        HeadRef::Detached => state.current.to_string(),
    };

    if !state.stage.is_empty() {
        out.push_str("\nChanges to be committed:\n");
        out.push_str("  (use \"git reset HEAD <file>...\" to unstage)\n");
        for file in &state.stage {
            out.push_str(&format!("\n\tnew file:   {}", file));
        }
    }

    if !state.working_directory.is_empty() {
        out.push_str("\n\nChanges not staged for commit:\n");
        out.push_str("  (use \"git add <file>...\" to update what will be committed)\n");
        for file in &state.working_directory {
            out.push_str(&format!("\n\tmodified:   {}", file));
        }
    }

    if state.stage.is_empty() && state.working_directory.is_empty() {
        out.push_str("\nnothing to commit, working tree clean");
    }

    out
}
