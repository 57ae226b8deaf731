//! engine::handlers::checkout
//!
//! `git checkout <branch|commit>` and `git checkout -b <name>`.

use crate::core::config::Config;
use crate::core::state::{HeadRef, RepoState};
use crate::engine::error::SimError;
use crate::engine::exec::Transition;

use super::branch::with_new_branch;
use super::{head_id, resolve_target};

const HEAD: &str = "HEAD";

/// Attach HEAD to a branch, or detach it at a commit.
///
/// Branch names win over revisions, so a branch called `c1` shadows the
/// commit with that id. `HEAD` itself leaves everything where it is.
pub(crate) fn existing(state: &RepoState, target: &str) -> Result<Transition, SimError> {
    if target == HEAD {
        let explanation = match state.current_branch() {
            Some(branch) => format!("Already on branch '{}'.", branch.name),
            None => format!("HEAD is already detached at commit {}.", head_id(state)?),
        };
        return Ok(Transition::unchanged(state, explanation));
    }

    if let Some(branch) = state.branch(target) {
        let mut next = state.clone();
        next.move_head(&branch.head);
        next.current = HeadRef::Branch(branch.name.clone());
        return Ok(Transition::new(
            next,
            format!("Switched to branch '{}'.", branch.name),
        ));
    }

    let id = resolve_target(state, target)?;
    let mut next = state.clone();
    next.move_head(&id);
    next.current = HeadRef::Detached;

    Ok(Transition::new(
        next,
        format!(
            "HEAD is now detached at commit {}. New commits will not belong to any branch.",
            id
        ),
    ))
}

/// Create a branch at HEAD and attach to it. The HEAD commit does not move.
pub(crate) fn create(
    state: &RepoState,
    name: &str,
    config: &Config,
) -> Result<Transition, SimError> {
    let head = head_id(state)?;
    let (mut next, name) = with_new_branch(state, name, head, config)?;
    next.current = HeadRef::Branch(name.clone());

    Ok(Transition::new(
        next,
        format!("Created and switched to new branch '{}'.", name),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{run, step};
    use super::*;
    use crate::core::revision::RevisionError;

    #[test]
    fn switch_branch_moves_head_flag() {
        let state = run(&[
            "git checkout -b feature",
            "git add a",
            "git commit -m a",
            "git checkout main",
        ]);

        assert_eq!(state.current.to_string(), "main");
        assert!(state.commit("c1").unwrap().is_head);
        assert!(!state.commit("c2").unwrap().is_head);
    }

    #[test]
    fn create_keeps_head_commit() {
        let state = run(&["git checkout -b feature"]);
        assert_eq!(state.current.to_string(), "feature");
        assert_eq!(state.branch("feature").unwrap().head.as_str(), "c1");
        assert!(state.commit("c1").unwrap().is_head);
    }

    #[test]
    fn create_existing_rejected() {
        let state = run(&[]);
        let err = step(&state, "git checkout -b main", &Config::default()).unwrap_err();
        assert_eq!(err, SimError::AlreadyExists("main".into()));
    }

    #[test]
    fn commit_id_detaches() {
        let state = run(&["git add a", "git commit -m two", "git checkout c1"]);
        assert!(state.current.is_detached());
        assert!(state.commit("c1").unwrap().is_head);
        assert_eq!(state.branch("main").unwrap().head.as_str(), "c2");
    }

    #[test]
    fn relative_revision_detaches() {
        let state = run(&["git add a", "git commit -m two", "git checkout HEAD~1"]);
        assert!(state.current.is_detached());
        assert_eq!(state.head_commit().unwrap().id.as_str(), "c1");
    }

    #[test]
    fn head_keeps_branch_attached() {
        let state = run(&["git add a", "git commit -m two"]);
        let t = step(&state, "git checkout HEAD", &Config::default()).unwrap();

        assert_eq!(t.state, state);
        assert_eq!(t.state.current.to_string(), "main");
        assert_eq!(t.explanation, "Already on branch 'main'.");
    }

    #[test]
    fn head_while_detached_stays_detached() {
        let state = run(&["git add a", "git commit -m two", "git checkout c1"]);
        let t = step(&state, "git checkout HEAD", &Config::default()).unwrap();

        assert_eq!(t.state, state);
        assert!(t.explanation.contains("c1"));
    }

    #[test]
    fn unknown_target() {
        let state = run(&[]);
        let err = step(&state, "git checkout nope", &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "branch or commit 'nope' not found");
    }

    #[test]
    fn exact_id_beats_prefix() {
        let lines = vec!["git commit --allow-empty -m x"; 10];
        let state = run(&lines);

        // c1, c10 and c11 all start with "c1".
        let t = step(&state, "git checkout c1", &Config::default()).unwrap();
        assert_eq!(t.state.head_commit().unwrap().id.as_str(), "c1");

        let err = step(&state, "git checkout c", &Config::default()).unwrap_err();
        assert!(matches!(
            err,
            SimError::Revision(RevisionError::Ambiguous { .. })
        ));
    }
}
