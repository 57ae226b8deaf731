//! core::revision
//!
//! Resolve revision expressions against a snapshot.
//!
//! Supported forms, tried in order:
//! 1. `HEAD`
//! 2. `HEAD~N` and `HEAD^` (first-parent walk)
//! 3. An exact commit id
//! 4. A branch name
//! 5. A unique commit id prefix

use super::state::RepoState;
use super::types::CommitId;
use thiserror::Error;

/// Errors from revision resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RevisionError {
    #[error("revision '{0}' not found")]
    NotFound(String),

    #[error("ambiguous revision '{prefix}': matches {}", .candidates.join(", "))]
    Ambiguous {
        prefix: String,
        candidates: Vec<String>,
    },

    #[error("commit {0} has no parent")]
    NoParent(String),

    #[error("HEAD is not set")]
    NoHead,
}

/// Resolve `rev` to a commit id.
///
/// # Example
///
/// ```
/// use gitsim::core::config::Config;
/// use gitsim::core::revision::resolve;
/// use gitsim::core::state::RepoState;
/// use gitsim::core::types::CommitId;
///
/// let mut state = RepoState::new(&Config::default());
/// state.append_commit(CommitId::from_seq(1), None, "two".into());
///
/// assert_eq!(resolve(&state, "HEAD").unwrap().as_str(), "c2");
/// assert_eq!(resolve(&state, "HEAD~1").unwrap().as_str(), "c1");
/// assert_eq!(resolve(&state, "main").unwrap().as_str(), "c2");
/// assert!(resolve(&state, "HEAD~2").is_err());
/// ```
pub fn resolve(state: &RepoState, rev: &str) -> Result<CommitId, RevisionError> {
    if let Some(steps) = parse_head_offset(rev) {
        let head = state.head_commit().ok_or(RevisionError::NoHead)?;
        return walk_first_parent(state, &head.id, steps);
    }

    if let Some(commit) = state.commit(rev) {
        return Ok(commit.id.clone());
    }

    if let Some(branch) = state.branch(rev) {
        return Ok(branch.head.clone());
    }

    resolve_commit(state, rev)
}

/// Resolve a commit id or unique id prefix; branches and `HEAD` are not
/// considered.
pub fn resolve_commit(state: &RepoState, rev: &str) -> Result<CommitId, RevisionError> {
    if let Some(commit) = state.commit(rev) {
        return Ok(commit.id.clone());
    }

    if rev.is_empty() {
        return Err(RevisionError::NotFound(rev.to_string()));
    }

    let matches: Vec<&CommitId> = state
        .commits
        .iter()
        .map(|c| &c.id)
        .filter(|id| id.as_str().starts_with(rev))
        .collect();

    match matches.as_slice() {
        [] => Err(RevisionError::NotFound(rev.to_string())),
        [only] => Ok((*only).clone()),
        many => Err(RevisionError::Ambiguous {
            prefix: rev.to_string(),
            candidates: many.iter().map(|id| id.to_string()).collect(),
        }),
    }
}

/// Parse `HEAD`, `HEAD^` and `HEAD~N` into a first-parent step count.
fn parse_head_offset(rev: &str) -> Option<usize> {
    let rest = rev.strip_prefix("HEAD")?;
    match rest {
        "" => Some(0),
        "^" => Some(1),
        "~" => Some(1),
        _ => rest.strip_prefix('~')?.parse().ok(),
    }
}

/// Follow first parents `steps` times from `start`.
fn walk_first_parent(
    state: &RepoState,
    start: &CommitId,
    steps: usize,
) -> Result<CommitId, RevisionError> {
    let mut current = start.clone();
    for _ in 0..steps {
        let commit = state
            .commit(current.as_str())
            .ok_or_else(|| RevisionError::NotFound(current.to_string()))?;
        current = commit
            .parent
            .clone()
            .ok_or_else(|| RevisionError::NoParent(commit.id.to_string()))?;
    }
    Ok(current)
}
