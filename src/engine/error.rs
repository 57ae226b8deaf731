//! engine::error
//!
//! Errors a command can end in.
//!
//! Every variant is a validation failure detected inside the parser or a
//! handler. None of them is retried and none leaves a partial mutation
//! behind: the session simply keeps its previous snapshot.

use thiserror::Error;

use crate::core::revision::RevisionError;
use crate::core::types::TypeError;
use crate::core::verify::VerifyError;

/// What kind of reference failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Branch,
    BranchOrCommit,
}

impl std::fmt::Display for RefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefKind::Branch => f.write_str("branch"),
            RefKind::BranchOrCommit => f.write_str("branch or commit"),
        }
    }
}

/// A rejected command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("unrecognized command '{0}'. Use \"git <command>\" for Git operations")]
    UnrecognizedCommand(String),

    #[error("Unknown git command: {name}")]
    UnknownSubcommand {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("{command}: {message}")]
    MissingArgument {
        command: &'static str,
        message: &'static str,
    },

    #[error("{command}: unrecognized option '{option}'")]
    UnknownOption {
        command: &'static str,
        option: String,
    },

    #[error("{kind} '{name}' not found")]
    NotFound { kind: RefKind, name: String },

    #[error(transparent)]
    Revision(#[from] RevisionError),

    #[error("a branch named '{0}' already exists")]
    AlreadyExists(String),

    #[error(transparent)]
    InvalidBranchName(#[from] TypeError),

    #[error("{0}")]
    InvalidState(String),

    #[error("the branch '{0}' is not fully merged. Use 'git branch -D {0}' to delete it anyway")]
    NotMerged(String),

    #[error("nothing staged for commit. Use \"git add <file>\" first")]
    NothingStaged,

    #[error("internal error, repository would become inconsistent: {0}")]
    Inconsistent(#[from] VerifyError),
}

impl SimError {
    /// Suggestions to show alongside the error.
    pub fn suggestions(&self) -> &[String] {
        match self {
            SimError::UnknownSubcommand { suggestions, .. } => suggestions.as_slice(),
            _ => &[],
        }
    }

    pub(crate) fn branch_not_found(name: &str) -> Self {
        SimError::NotFound {
            kind: RefKind::Branch,
            name: name.to_string(),
        }
    }
}
