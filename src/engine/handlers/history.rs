//! engine::handlers::history
//!
//! Commands that rewrite where the current branch points: `merge`, `rebase`
//! and `reset`.
//!
//! # Invariants
//!
//! - `merge` and `rebase` need an attached HEAD and a different source branch
//! - `rebase` produces one synthetic commit, not a replay of every commit
//! - `reset` in detached HEAD moves only HEAD

use crate::core::state::{Branch, RepoState};
use crate::engine::command::ResetMode;
use crate::engine::error::SimError;
use crate::engine::exec::Transition;

use super::resolve_target;

/// The two branches taking part in a merge or rebase.
///
/// Returns `(current, other)`.
fn integration_pair<'a>(
    state: &'a RepoState,
    other: &str,
    verb: &str,
) -> Result<(&'a Branch, &'a Branch), SimError> {
    let other = state
        .branch(other)
        .ok_or_else(|| SimError::branch_not_found(other))?;

    let current = state.current_branch().ok_or_else(|| {
        SimError::InvalidState(format!(
            "cannot {} in detached HEAD state. Check out a branch first",
            verb
        ))
    })?;

    if current.name == other.name {
        return Err(SimError::InvalidState(format!(
            "cannot {} branch '{}' with itself",
            verb, other.name
        )));
    }

    Ok((current, other))
}

/// Two-parent commit joining `source` into the current branch.
pub(crate) fn merge(state: &RepoState, source: &str) -> Result<Transition, SimError> {
    let (current, source) = integration_pair(state, source, "merge")?;

    let message = format!("Merge branch '{}' into {}", source.name, current.name);
    let mut next = state.clone();
    let id = next.append_commit(current.head.clone(), Some(source.head.clone()), message);

    Ok(Transition::new(
        next,
        format!(
            "Merged branch '{}' into '{}' with merge commit {}.",
            source.name, current.name, id
        ),
    ))
}

/// Put the current branch on top of `onto` as a single new commit.
pub(crate) fn rebase(state: &RepoState, onto: &str) -> Result<Transition, SimError> {
    let (current, onto) = integration_pair(state, onto, "rebase")?;

    let message = format!("Rebased commit from {}", current.name);
    let mut next = state.clone();
    let id = next.append_commit(onto.head.clone(), None, message);

    Ok(Transition::new(
        next,
        format!(
            "Rebased branch '{}' onto '{}'. Its work now sits on top as {}.",
            current.name, onto.name, id
        ),
    ))
}

/// Move HEAD, and the attached branch, to `target`.
pub(crate) fn reset(
    state: &RepoState,
    mode: ResetMode,
    target: &str,
) -> Result<Transition, SimError> {
    let id = resolve_target(state, target)?;

    let mut next = state.clone();
    next.mark_tip(&id);
    next.point_current_branch(&id);

    match mode {
        ResetMode::Soft => {}
        ResetMode::Mixed => {
            let staged = std::mem::take(&mut next.stage);
            next.working_directory.extend(staged);
        }
        ResetMode::Hard => {
            next.stage.clear();
            next.working_directory.clear();
        }
    }

    Ok(Transition::new(
        next,
        format!("Reset {} to commit {}.", mode.as_flag(), id),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{run, step};
    use super::*;
    use crate::core::config::Config;
    use crate::core::revision::RevisionError;

    /// main: c1 - c3, feature: c1 - c2
    fn diverged() -> RepoState {
        run(&[
            "git checkout -b feature",
            "git add f",
            "git commit -m feature work",
            "git checkout main",
            "git add m",
            "git commit -m main work",
        ])
    }

    mod merging {
        use super::*;

        #[test]
        fn creates_two_parent_commit() {
            let state = step(&diverged(), "git merge feature", &Config::default())
                .unwrap()
                .state;
            let merge = state.commit("c4").unwrap();

            assert_eq!(merge.message, "Merge branch 'feature' into main");
            assert_eq!(merge.parent.as_ref().unwrap().as_str(), "c3");
            assert_eq!(merge.second_parent.as_ref().unwrap().as_str(), "c2");
            assert!(merge.is_head && merge.is_latest);
            assert_eq!(state.branch("main").unwrap().head.as_str(), "c4");
            assert_eq!(state.branch("feature").unwrap().head.as_str(), "c2");
        }

        #[test]
        fn self_merge_rejected() {
            let err = step(&diverged(), "git merge main", &Config::default()).unwrap_err();
            assert!(matches!(err, SimError::InvalidState(_)));
        }

        #[test]
        fn missing_branch() {
            let err = step(&diverged(), "git merge ghost", &Config::default()).unwrap_err();
            assert_eq!(err, SimError::branch_not_found("ghost"));
        }

        #[test]
        fn detached_rejected() {
            let state = step(&diverged(), "git checkout c1", &Config::default())
                .unwrap()
                .state;
            let err = step(&state, "git merge feature", &Config::default()).unwrap_err();
            assert!(err.to_string().contains("detached HEAD"));
        }
    }

    mod rebasing {
        use super::*;

        #[test]
        fn single_synthetic_commit_on_target() {
            let state = step(&diverged(), "git rebase feature", &Config::default())
                .unwrap()
                .state;
            let rebased = state.commit("c4").unwrap();

            assert_eq!(rebased.message, "Rebased commit from main");
            assert_eq!(rebased.parent.as_ref().unwrap().as_str(), "c2");
            assert!(rebased.second_parent.is_none());
            assert_eq!(state.branch("main").unwrap().head.as_str(), "c4");
        }

        #[test]
        fn onto_self_rejected() {
            let err = step(&diverged(), "git rebase main", &Config::default()).unwrap_err();
            assert!(matches!(err, SimError::InvalidState(_)));
        }
    }

    mod resetting {
        use super::*;

        fn dirty() -> RepoState {
            let mut state = run(&["git add a", "git commit -m two", "git add b"]);
            state.working_directory.push("w".into());
            state
        }

        #[test]
        fn hard_clears_everything() {
            let state = step(&dirty(), "git reset --hard HEAD~1", &Config::default())
                .unwrap()
                .state;

            assert_eq!(state.branch("main").unwrap().head.as_str(), "c1");
            assert!(state.commit("c1").unwrap().is_head);
            assert!(state.commit("c1").unwrap().is_latest);
            assert!(!state.commit("c2").unwrap().is_latest);
            assert!(state.stage.is_empty());
            assert!(state.working_directory.is_empty());
            // Commits are never removed.
            assert_eq!(state.commits.len(), 2);
        }

        #[test]
        fn mixed_unstages() {
            let state = step(&dirty(), "git reset c1", &Config::default())
                .unwrap()
                .state;
            assert!(state.stage.is_empty());
            assert_eq!(state.working_directory, vec!["w", "b"]);
        }

        #[test]
        fn soft_keeps_stage() {
            let state = step(&dirty(), "git reset --soft", &Config::default())
                .unwrap()
                .state;
            assert_eq!(state.branch("main").unwrap().head.as_str(), "c1");
            assert_eq!(state.stage, vec!["b"]);
            assert_eq!(state.working_directory, vec!["w"]);
        }

        #[test]
        fn past_root_fails() {
            let state = run(&[]);
            let err = step(&state, "git reset --hard HEAD~1", &Config::default()).unwrap_err();
            assert_eq!(err, SimError::Revision(RevisionError::NoParent("c1".into())));
        }

        #[test]
        fn commit_id_beats_branch_of_same_name() {
            let state = run(&[
                "git branch c2",
                "git add a",
                "git commit -m two",
                "git add b",
                "git commit -m three",
                "git reset --hard c2",
            ]);
            assert_eq!(state.head_commit().unwrap().id.as_str(), "c2");
            assert_eq!(state.branch("main").unwrap().head.as_str(), "c2");
            assert_eq!(state.branch("c2").unwrap().head.as_str(), "c1");
        }

        #[test]
        fn detached_moves_only_head() {
            let state = run(&[
                "git add a",
                "git commit -m two",
                "git checkout c2",
                "git reset --hard c1",
            ]);
            assert!(state.current.is_detached());
            assert_eq!(state.head_commit().unwrap().id.as_str(), "c1");
            assert_eq!(state.branch("main").unwrap().head.as_str(), "c2");
        }
    }
}
