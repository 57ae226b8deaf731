//! engine::exec
//!
//! The single state transition function.
//!
//! # Architecture
//!
//! [`apply`] is the ONLY way a command changes a repository. It never touches
//! its input: handlers build the next snapshot on a clone, and the result is
//! verified before it is handed back. The caller decides whether to replace
//! its snapshot; [`crate::engine::Session`] does so on `Ok` only.
//!
//! # Invariants
//!
//! - `apply` is pure: same state, command and config give the same result
//! - An `Err` carries no partial state
//! - Every returned state passes [`crate::core::verify::verify`]
//!
//! # Example
//!
//! ```
//! use gitsim::core::config::Config;
//! use gitsim::core::state::RepoState;
//! use gitsim::engine::apply;
//! use gitsim::engine::command::{BranchAction, GitCommand};
//!
//! let config = Config::default();
//! let state = RepoState::new(&config);
//!
//! let create = GitCommand::Branch(BranchAction::Create {
//!     name: "feature".into(),
//!     start_point: None,
//! });
//! let next = apply(&state, &create, &config).unwrap();
//! assert!(next.state.branch("feature").is_some());
//! assert!(state.branch("feature").is_none());
//! ```

use crate::core::config::Config;
use crate::core::state::RepoState;
use crate::core::verify::verify;

use super::command::{BranchAction, CheckoutTarget, GitCommand};
use super::error::SimError;
use super::handlers::{branch, checkout, history, info, staging};

/// A successful command: the next snapshot and what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: RepoState,
    pub explanation: String,
}

impl Transition {
    pub fn new(state: RepoState, explanation: impl Into<String>) -> Self {
        Self {
            state,
            explanation: explanation.into(),
        }
    }

    /// A read-only command: the snapshot is carried over as is.
    pub fn unchanged(state: &RepoState, explanation: impl Into<String>) -> Self {
        Self::new(state.clone(), explanation)
    }
}

/// Apply `command` to `state`.
pub fn apply(
    state: &RepoState,
    command: &GitCommand,
    config: &Config,
) -> Result<Transition, SimError> {
    let result = match command {
        GitCommand::Init => Ok(info::init(config)),
        GitCommand::Add(target) => staging::add(state, target),
        GitCommand::Commit {
            message,
            allow_empty,
        } => staging::commit(state, message.as_deref(), *allow_empty, config),
        GitCommand::Branch(BranchAction::List) => Ok(branch::list(state)),
        GitCommand::Branch(BranchAction::Create { name, start_point }) => {
            branch::create(state, name, start_point.as_deref(), config)
        }
        GitCommand::Branch(BranchAction::Delete { name, force }) => {
            branch::delete(state, name, *force)
        }
        GitCommand::Checkout(CheckoutTarget::Create { name }) => {
            checkout::create(state, name, config)
        }
        GitCommand::Checkout(CheckoutTarget::Existing { target }) => {
            checkout::existing(state, target)
        }
        GitCommand::Merge { branch } => history::merge(state, branch),
        GitCommand::Rebase { onto } => history::rebase(state, onto),
        GitCommand::Reset { mode, target } => history::reset(state, *mode, target),
        GitCommand::Status => Ok(info::status(state)),
        GitCommand::Stub(stub) => Ok(Transition::unchanged(state, stub.explanation())),
    };

    let result = result.and_then(|transition| {
        verify(&transition.state).into_result()?;
        Ok(transition)
    });

    match &result {
        Ok(transition) => tracing::debug!(
            ?command,
            commits = transition.state.commits.len(),
            current = %transition.state.current,
            "applied command"
        ),
        Err(err @ SimError::Inconsistent(_)) => {
            tracing::error!(?command, error = %err, "command left an inconsistent state")
        }
        Err(err) => tracing::debug!(?command, error = %err, "command rejected"),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::command::{AddTarget, ResetMode, StubCommand};

    fn setup() -> (RepoState, Config) {
        let config = Config::default();
        (RepoState::new(&config), config)
    }

    #[test]
    fn input_state_is_never_modified() {
        let (state, config) = setup();
        let before = state.clone();

        let commands = [
            GitCommand::Add(AddTarget::Files(vec!["a".into()])),
            GitCommand::Commit {
                message: None,
                allow_empty: true,
            },
            GitCommand::Reset {
                mode: ResetMode::Hard,
                target: "HEAD~1".into(),
            },
        ];
        for command in &commands {
            let _ = apply(&state, command, &config);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn read_only_commands_keep_state() {
        let (state, config) = setup();
        for command in [
            GitCommand::Status,
            GitCommand::Branch(BranchAction::List),
            GitCommand::Stub(StubCommand::Push),
        ] {
            let t = apply(&state, &command, &config).unwrap();
            assert_eq!(t.state, state);
            assert!(!t.explanation.is_empty());
        }
    }

    #[test]
    fn stub_explanation_is_static() {
        let (state, config) = setup();
        let t = apply(&state, &GitCommand::Stub(StubCommand::Log), &config).unwrap();
        assert_eq!(t.explanation, StubCommand::Log.explanation());
    }

    #[test]
    fn inconsistent_result_is_rejected() {
        let (mut state, config) = setup();
        // Two HEAD flags cannot survive a transition.
        state.append_commit(state.commits[0].id.clone(), None, "two".into());
        state.commits[0].is_head = true;

        let err = apply(&state, &GitCommand::Status, &config).unwrap_err();
        assert!(matches!(err, SimError::Inconsistent(_)));
    }
}
