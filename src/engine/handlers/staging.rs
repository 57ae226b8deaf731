//! engine::handlers::staging
//!
//! `git add` and `git commit`.

use crate::core::config::Config;
use crate::core::state::RepoState;
use crate::engine::command::AddTarget;
use crate::engine::error::SimError;
use crate::engine::exec::Transition;
use crate::engine::parse::DEFAULT_COMMIT_MESSAGE;

use super::head_id;

/// Move files into the stage.
///
/// `.` takes the whole working directory. A named file comes out of the
/// working directory when it is there and is staged either way; staging is
/// idempotent per file.
pub(crate) fn add(state: &RepoState, target: &AddTarget) -> Result<Transition, SimError> {
    let mut next = state.clone();

    let files: Vec<String> = match target {
        AddTarget::All => {
            if state.working_directory.is_empty() {
                return Ok(Transition::unchanged(
                    state,
                    "Nothing to add: the working directory has no changes.",
                ));
            }
            std::mem::take(&mut next.working_directory)
        }
        AddTarget::Files(files) => {
            next.working_directory.retain(|f| !files.contains(f));
            files.clone()
        }
    };

    for file in files {
        if !next.stage.contains(&file) {
            next.stage.push(file);
        }
    }

    Ok(Transition::new(
        next,
        "git add: moves changes into the staging area for the next commit.",
    ))
}

/// Record the stage as a new commit on top of HEAD.
pub(crate) fn commit(
    state: &RepoState,
    message: Option<&str>,
    allow_empty: bool,
    config: &Config,
) -> Result<Transition, SimError> {
    if state.stage.is_empty() && !allow_empty && !config.allow_empty_commits() {
        return Err(SimError::NothingStaged);
    }

    let parent = head_id(state)?;
    let message = message.unwrap_or(DEFAULT_COMMIT_MESSAGE).to_string();

    let mut next = state.clone();
    let id = next.append_commit(parent, None, message.clone());
    next.stage.clear();

    let explanation = if next.current.is_detached() {
        format!(
            "git commit: recorded {} with message \"{}\". HEAD is detached, so no branch moved.",
            id, message
        )
    } else {
        format!(
            "git commit: recorded the staged changes as {} on '{}' with message \"{}\".",
            id, next.current, message
        )
    };
    Ok(Transition::new(next, explanation))
}
