//! engine::handlers
//!
//! One module per command family. Every handler borrows the current snapshot,
//! validates its arguments against it, and either returns an error or builds
//! the next snapshot on a clone.
//!
//! - [`staging`] - `add`, `commit`
//! - [`branch`] - `branch` list/create/delete
//! - [`checkout`] - `checkout`, `checkout -b`
//! - [`history`] - `merge`, `rebase`, `reset`
//! - [`info`] - `init`, `status`

pub(crate) mod branch;
pub(crate) mod checkout;
pub(crate) mod history;
pub(crate) mod info;
pub(crate) mod staging;

use crate::core::revision::{self, RevisionError};
use crate::core::state::RepoState;
use crate::core::types::CommitId;

use super::error::{RefKind, SimError};

/// Resolve a user-supplied revision, reporting a plain miss as "not found".
fn resolve_target(state: &RepoState, rev: &str) -> Result<CommitId, SimError> {
    revision::resolve(state, rev).map_err(|err| match err {
        RevisionError::NotFound(name) => SimError::NotFound {
            kind: RefKind::BranchOrCommit,
            name,
        },
        other => other.into(),
    })
}

/// The HEAD commit id. Verified states always have one.
fn head_id(state: &RepoState) -> Result<CommitId, SimError> {
    state
        .head_commit()
        .map(|c| c.id.clone())
        .ok_or_else(|| RevisionError::NoHead.into())
}

#[cfg(test)]
mod test_support {
    use crate::core::config::Config;
    use crate::core::state::RepoState;
    use crate::engine::exec::{apply, Transition};
    use crate::engine::parse::{parse_line, Invocation};

    /// Run lines in order against a fresh repository, panicking on failure.
    pub fn run(lines: &[&str]) -> RepoState {
        let config = Config::default();
        lines
            .iter()
            .fold(RepoState::new(&config), |state, line| {
                step(&state, line, &config).unwrap().state
            })
    }

    /// Apply one line.
    pub fn step(
        state: &RepoState,
        line: &str,
        config: &Config,
    ) -> Result<Transition, crate::engine::SimError> {
        match parse_line(line)? {
            Invocation::Git(cmd) => apply(state, &cmd, config),
            other => panic!("not a git command: {:?}", other),
        }
    }
}
