//! core::verify
//!
//! Invariant verification for repository snapshots.
//!
//! # Checks
//!
//! - Exactly one HEAD commit
//! - Commit ids and branch names are unique
//! - Parents reference earlier commits (no forward or self references)
//! - Branch heads reference existing commits
//! - HEAD is attached to an existing branch or detached
//! - An attached HEAD sits on its branch's head commit
//! - `next_seq` is above every existing commit's sequence number
//!
//! # Invariants
//!
//! - Never mutates the snapshot
//! - Deterministic: errors are reported in commit/branch order

use super::graph::CommitGraph;
use super::state::{HeadRef, RepoState};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// A violated invariant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("expected exactly one HEAD commit, found {0}")]
    HeadCount(usize),

    #[error("duplicate commit id: {0}")]
    DuplicateCommit(String),

    #[error("duplicate branch name: {0}")]
    DuplicateBranch(String),

    #[error("commit {commit} references {parent}, which is not an earlier commit")]
    ForwardReference { commit: String, parent: String },

    #[error("branch {branch} points at missing commit {commit}")]
    DanglingBranch { branch: String, commit: String },

    #[error("HEAD is attached to missing branch {0}")]
    MissingCurrentBranch(String),

    #[error("HEAD is on {head} but branch {branch} points at {tip}")]
    HeadOffBranch {
        head: String,
        branch: String,
        tip: String,
    },

    #[error("cycle detected in commit graph at {0}")]
    CycleDetected(String),

    #[error("next commit sequence {next_seq} would reuse id {commit}")]
    StaleSequence { commit: String, next_seq: u64 },
}

/// Result of verification.
#[derive(Debug)]
pub struct VerifyResult {
    /// Whether verification passed
    pub ok: bool,
    /// Errors found during verification
    pub errors: Vec<VerifyError>,
}

impl VerifyResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: vec![],
        }
    }

    /// Create a failed result with errors.
    pub fn failure(errors: Vec<VerifyError>) -> Self {
        Self { ok: false, errors }
    }

    /// Convert to a `Result`, keeping the first error.
    pub fn into_result(self) -> Result<(), VerifyError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Verify every snapshot invariant.
pub fn verify(state: &RepoState) -> VerifyResult {
    let mut errors = Vec::new();

    let heads = state.commits.iter().filter(|c| c.is_head).count();
    if heads != 1 {
        errors.push(VerifyError::HeadCount(heads));
    }

    // Position of each commit; parents must have a smaller one.
    let mut position = HashMap::new();
    for (index, commit) in state.commits.iter().enumerate() {
        if position.insert(commit.id.clone(), index).is_some() {
            errors.push(VerifyError::DuplicateCommit(commit.id.to_string()));
        }
        for parent in commit.parents() {
            let earlier = position.get(parent).is_some_and(|&p| p < index);
            if !earlier {
                errors.push(VerifyError::ForwardReference {
                    commit: commit.id.to_string(),
                    parent: parent.to_string(),
                });
            }
        }
    }

    if let Some(commit) = state.commits.iter().find(|c| c.id.seq() >= state.next_seq) {
        errors.push(VerifyError::StaleSequence {
            commit: commit.id.to_string(),
            next_seq: state.next_seq,
        });
    }

    let mut names = HashSet::new();
    for branch in &state.branches {
        if !names.insert(branch.name.as_str()) {
            errors.push(VerifyError::DuplicateBranch(branch.name.to_string()));
        }
        if !position.contains_key(&branch.head) {
            errors.push(VerifyError::DanglingBranch {
                branch: branch.name.to_string(),
                commit: branch.head.to_string(),
            });
        }
    }

    if let HeadRef::Branch(name) = &state.current {
        match (state.branch(name.as_str()), state.head_commit()) {
            (None, _) => errors.push(VerifyError::MissingCurrentBranch(name.to_string())),
            (Some(branch), Some(head)) if branch.head != head.id => {
                errors.push(VerifyError::HeadOffBranch {
                    head: head.id.to_string(),
                    branch: name.to_string(),
                    tip: branch.head.to_string(),
                })
            }
            _ => {}
        }
    }

    // Ordering already rules cycles out; this catches hand-built states whose
    // duplicate ids hide a loop from the positional check.
    if let Some(commit) = CommitGraph::from_state(state).find_cycle() {
        errors.push(VerifyError::CycleDetected(commit.to_string()));
    }

    if errors.is_empty() {
        VerifyResult::success()
    } else {
        VerifyResult::failure(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::state::Branch;
    use crate::core::types::{BranchName, CommitId};

    fn fresh() -> RepoState {
        RepoState::new(&Config::default())
    }

    #[test]
    fn fresh_state_verifies() {
        let result = verify(&fresh());
        assert!(result.ok, "{:?}", result.errors);
    }

    #[test]
    fn zero_heads_detected() {
        let mut state = fresh();
        state.commits[0].is_head = false;
        assert!(verify(&state).errors.contains(&VerifyError::HeadCount(0)));
    }

    #[test]
    fn two_heads_detected() {
        let mut state = fresh();
        state.append_commit(CommitId::from_seq(1), None, "two".into());
        state.commits[0].is_head = true;
        assert!(verify(&state).errors.contains(&VerifyError::HeadCount(2)));
    }

    #[test]
    fn forward_reference_detected() {
        let mut state = fresh();
        state.append_commit(CommitId::from_seq(1), None, "two".into());
        state.commits[0].parent = Some(CommitId::from_seq(2));
        let errors = verify(&state).errors;
        assert!(errors.contains(&VerifyError::ForwardReference {
            commit: "c1".into(),
            parent: "c2".into(),
        }));
    }

    #[test]
    fn self_reference_detected() {
        let mut state = fresh();
        state.commits[0].parent = Some(CommitId::from_seq(1));
        assert!(!verify(&state).ok);
    }

    #[test]
    fn dangling_branch_detected() {
        let mut state = fresh();
        state.branches.push(Branch {
            name: BranchName::new("ghost").unwrap(),
            color: "#000000".into(),
            head: CommitId::from_seq(9),
        });
        assert_eq!(
            verify(&state).into_result(),
            Err(VerifyError::DanglingBranch {
                branch: "ghost".into(),
                commit: "c9".into(),
            })
        );
    }

    #[test]
    fn missing_current_branch_detected() {
        let mut state = fresh();
        state.current = HeadRef::Branch(BranchName::new("gone").unwrap());
        assert_eq!(
            verify(&state).into_result(),
            Err(VerifyError::MissingCurrentBranch("gone".into()))
        );
    }

    #[test]
    fn head_off_branch_detected() {
        let mut state = fresh();
        state.append_commit(CommitId::from_seq(1), None, "two".into());
        state.move_head(&CommitId::from_seq(1));
        assert!(matches!(
            verify(&state).into_result(),
            Err(VerifyError::HeadOffBranch { .. })
        ));
    }

    #[test]
    fn stale_sequence_detected() {
        let mut state = fresh();
        state.append_commit(CommitId::from_seq(1), None, "two".into());
        state.next_seq = 2;
        assert_eq!(
            verify(&state).into_result(),
            Err(VerifyError::StaleSequence {
                commit: "c2".into(),
                next_seq: 2,
            })
        );
    }

    #[test]
    fn sequence_may_run_ahead() {
        let mut state = fresh();
        state.next_seq = 40;
        assert!(verify(&state).ok);
    }

    #[test]
    fn detached_head_anywhere_is_fine() {
        let mut state = fresh();
        state.append_commit(CommitId::from_seq(1), None, "two".into());
        state.current = HeadRef::Detached;
        state.move_head(&CommitId::from_seq(1));
        assert!(verify(&state).ok);
    }
}
