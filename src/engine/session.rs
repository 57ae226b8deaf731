//! engine::session
//!
//! An interactive session: one repository snapshot plus what the user sees.
//!
//! # Invariants
//!
//! - The snapshot is replaced only by a successful [`apply`]
//! - A rejected command sets the error and leaves the previous explanation
//! - A successful command clears the error
//! - Every non-blank line except `clear` is appended to the history,
//!   whatever its outcome

use crate::core::config::Config;
use crate::core::state::RepoState;

use super::catalog::{self, GIT_HELP};
use super::error::SimError;
use super::exec::apply;
use super::parse::{parse_line, Invocation};
use super::suggest::suggest;

/// Result of submitting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input; nothing happened.
    Empty,
    /// History, explanation and error were wiped.
    Cleared,
    /// The command ran.
    Applied {
        explanation: String,
        suggestions: Vec<String>,
    },
    /// The command was rejected and the repository is unchanged.
    Rejected {
        error: String,
        suggestions: Vec<String>,
    },
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected { .. })
    }

    pub fn suggestions(&self) -> &[String] {
        match self {
            Outcome::Applied { suggestions, .. } | Outcome::Rejected { suggestions, .. } => {
                suggestions.as_slice()
            }
            Outcome::Empty | Outcome::Cleared => &[],
        }
    }
}

/// A running simulator session.
#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    state: RepoState,
    explanation: String,
    error: Option<String>,
    history: Vec<String>,
    last: Outcome,
}

impl Session {
    /// Start from the canonical fresh repository.
    pub fn new(config: Config) -> Self {
        let state = RepoState::new(&config);
        Self {
            config,
            state,
            explanation: String::new(),
            error: None,
            history: Vec::new(),
            last: Outcome::Empty,
        }
    }

    /// Interpret one input line.
    pub fn submit(&mut self, line: &str) -> &Outcome {
        let trimmed = line.trim();

        self.last = match parse_line(trimmed) {
            Ok(Invocation::Empty) => Outcome::Empty,
            Ok(Invocation::Clear) => {
                self.history.clear();
                self.explanation.clear();
                self.error = None;
                tracing::debug!("history cleared");
                Outcome::Cleared
            }
            Ok(Invocation::GitHelp) => {
                self.history.push(trimmed.to_string());
                self.succeed(GIT_HELP.to_string(), catalog::all_names())
            }
            Ok(Invocation::Git(command)) => {
                self.history.push(trimmed.to_string());
                match apply(&self.state, &command, &self.config) {
                    Ok(transition) => {
                        self.state = transition.state;
                        self.succeed(transition.explanation, Vec::new())
                    }
                    Err(err) => self.fail(err),
                }
            }
            Err(err) => {
                self.history.push(trimmed.to_string());
                self.fail(err)
            }
        };

        &self.last
    }

    fn succeed(&mut self, explanation: String, suggestions: Vec<String>) -> Outcome {
        self.error = None;
        self.explanation = explanation.clone();
        Outcome::Applied {
            explanation,
            suggestions,
        }
    }

    fn fail(&mut self, err: SimError) -> Outcome {
        let error = err.to_string();
        self.error = Some(error.clone());
        Outcome::Rejected {
            error,
            suggestions: err.suggestions().to_vec(),
        }
    }

    /// Completions for a partially typed line against the current state.
    pub fn suggest(&self, partial: &str) -> Vec<String> {
        suggest(partial, &self.state)
    }

    pub fn state(&self) -> &RepoState {
        &self.state
    }

    /// Explanation of the last successful command.
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Error of the last command, if it was rejected.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submitted lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Suggestions attached to the last outcome.
    pub fn suggestions(&self) -> &[String] {
        self.last.suggestions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Config::default())
    }

    #[test]
    fn blank_lines_are_ignored() {
        let mut s = session();
        assert_eq!(s.submit("   "), &Outcome::Empty);
        assert!(s.history().is_empty());
    }

    #[test]
    fn success_replaces_state_and_explanation() {
        let mut s = session();
        let outcome = s.submit("git branch feature").clone();

        assert!(matches!(outcome, Outcome::Applied { .. }));
        assert!(s.state().branch("feature").is_some());
        assert!(s.explanation().contains("feature"));
        assert_eq!(s.error(), None);
    }

    #[test]
    fn failure_keeps_state_and_previous_explanation() {
        let mut s = session();
        s.submit("git branch feature");
        let before = s.state().clone();
        let explanation = s.explanation().to_string();

        assert!(s.submit("git checkout ghost").is_rejected());
        assert_eq!(s.state(), &before);
        assert_eq!(s.explanation(), explanation);
        assert_eq!(s.error(), Some("branch or commit 'ghost' not found"));

        s.submit("git status");
        assert_eq!(s.error(), None);
    }

    #[test]
    fn history_records_every_attempt() {
        let mut s = session();
        s.submit("git status");
        s.submit("rm -rf /");
        s.submit("git comit");
        s.submit("");
        assert_eq!(s.history(), ["git status", "rm -rf /", "git comit"]);
    }

    #[test]
    fn clear_wipes_display_not_state() {
        let mut s = session();
        s.submit("git branch feature");
        s.submit("git merge nope");
        assert_eq!(s.submit("clear"), &Outcome::Cleared);

        assert!(s.history().is_empty());
        assert_eq!(s.explanation(), "");
        assert_eq!(s.error(), None);
        assert!(s.state().branch("feature").is_some());
    }

    #[test]
    fn unknown_subcommand_suggests() {
        let mut s = session();
        s.submit("git stauts");
        assert_eq!(s.error(), Some("Unknown git command: stauts"));
        assert_eq!(s.suggestions(), ["git status", "git stash"]);
    }

    #[test]
    fn bare_git_lists_everything() {
        let mut s = session();
        s.submit("git");
        assert_eq!(s.explanation(), GIT_HELP);
        assert_eq!(s.suggestions().len(), catalog::CATALOG.len());
    }

    #[test]
    fn live_suggestions_track_state() {
        let mut s = session();
        assert!(s.suggest("git checkout f").is_empty());
        s.submit("git branch feature");
        assert_eq!(s.suggest("git checkout f"), vec!["git checkout feature"]);
    }
}
