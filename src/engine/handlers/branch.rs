//! engine::handlers::branch
//!
//! `git branch` list, create and delete.

use crate::core::config::Config;
use crate::core::graph::CommitGraph;
use crate::core::state::{Branch, RepoState};
use crate::core::types::{BranchName, CommitId};
use crate::engine::error::SimError;
use crate::engine::exec::Transition;

use super::{head_id, resolve_target};

/// One line per branch in creation order, `* ` marking the current one.
pub(crate) fn list(state: &RepoState) -> Transition {
    let current = state.current.branch();
    let lines: Vec<String> = state
        .branches
        .iter()
        .map(|b| {
            let marker = if Some(&b.name) == current { "* " } else { "  " };
            format!("{}{}", marker, b.name)
        })
        .collect();

    Transition::unchanged(
        state,
        format!("Branches in the repository:\n{}", lines.join("\n")),
    )
}

pub(crate) fn create(
    state: &RepoState,
    name: &str,
    start_point: Option<&str>,
    config: &Config,
) -> Result<Transition, SimError> {
    let head = match start_point {
        Some(rev) => resolve_target(state, rev)?,
        None => head_id(state)?,
    };
    let (next, name) = with_new_branch(state, name, head.clone(), config)?;

    Ok(Transition::new(
        next,
        format!("Created branch '{}' at commit {}.", name, head),
    ))
}

/// Clone `state` with a new branch `name` pointing at `head`.
///
/// Shared with `checkout -b`.
pub(crate) fn with_new_branch(
    state: &RepoState,
    name: &str,
    head: CommitId,
    config: &Config,
) -> Result<(RepoState, BranchName), SimError> {
    let name = BranchName::new(name)?;
    if state.branch(name.as_str()).is_some() {
        return Err(SimError::AlreadyExists(name.to_string()));
    }

    let mut next = state.clone();
    let color = state.next_branch_color(&config.palette());
    next.branches.push(Branch {
        name: name.clone(),
        color,
        head,
    });
    Ok((next, name))
}

/// Remove a branch pointer. Commits are kept.
///
/// Without `force` the branch tip must have a child somewhere, i.e. its work
/// was built upon or merged.
pub(crate) fn delete(state: &RepoState, name: &str, force: bool) -> Result<Transition, SimError> {
    if state.current.branch().is_some_and(|current| current == name) {
        return Err(SimError::InvalidState(format!(
            "cannot delete the branch '{}' you are currently on. Switch to another branch first",
            name
        )));
    }

    let branch = state
        .branch(name)
        .ok_or_else(|| SimError::branch_not_found(name))?;

    if !force && !CommitGraph::from_state(state).has_children(&branch.head) {
        return Err(SimError::NotMerged(name.to_string()));
    }

    let mut next = state.clone();
    next.branches.retain(|b| b.name.as_str() != name);

    Ok(Transition::new(next, format!("Deleted branch '{}'.", name)))
}
