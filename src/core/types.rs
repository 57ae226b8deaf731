//! core::types
//!
//! Strong types for the simulated repository.
//!
//! # Types
//!
//! - [`BranchName`] - Branch name validated against Git's ref-format rules
//! - [`CommitId`] - Simulated commit identifier (`c1`, `c2`, ...)
//!
//! # Validation
//!
//! Both types enforce validity at construction time, so handlers never have
//! to re-check a name once it has been parsed.
//!
//! # Examples
//!
//! ```
//! use gitsim::core::types::{BranchName, CommitId};
//!
//! let branch = BranchName::new("feature/login").unwrap();
//! assert_eq!(branch.as_str(), "feature/login");
//!
//! let id = CommitId::from_seq(3);
//! assert_eq!(id.as_str(), "c3");
//!
//! assert!(BranchName::new("bad..name").is_err());
//! assert!(CommitId::new("x9").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TypeError {
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid commit id: {0}")]
    InvalidCommitId(String),
}

/// A validated branch name.
///
/// Names follow `git check-ref-format --branch`:
/// - Cannot be empty, `@` or `HEAD`
/// - Cannot start with `.` or `-`
/// - Cannot end with `.lock` or `/`
/// - Cannot contain `..`, `@{`, `//`, or ASCII control characters
/// - Cannot contain spaces, `~`, `^`, `:`, `\`, `?`, `*`, `[`
///
/// # Example
///
/// ```
/// use gitsim::core::types::BranchName;
///
/// assert!(BranchName::new("main").is_ok());
/// assert!(BranchName::new("user@feature").is_ok());
///
/// assert!(BranchName::new("").is_err());
/// assert!(BranchName::new("-D").is_err());
/// assert!(BranchName::new("topic.lock").is_err());
/// assert!(BranchName::new("HEAD~1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    /// Characters that may never appear in a branch name.
    const FORBIDDEN_CHARS: [char; 8] = [' ', '~', '^', ':', '\\', '?', '*', '['];

    /// Substrings that may never appear in a branch name.
    const FORBIDDEN_SEQUENCES: [&'static str; 3] = ["..", "@{", "//"];

    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` if the name violates Git's
    /// ref-format rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        let reject = |why: String| Err(TypeError::InvalidBranchName(why));

        if name.is_empty() {
            return reject("branch name cannot be empty".into());
        }
        if name == "@" || name == "HEAD" {
            return reject(format!("branch name cannot be '{name}' (reserved)"));
        }
        if let Some(first) = name.chars().next().filter(|c| *c == '.' || *c == '-') {
            return reject(format!("branch name cannot start with '{first}'"));
        }
        if name.ends_with(".lock") {
            return reject("branch name cannot end with '.lock'".into());
        }
        if name.ends_with('/') {
            return reject("branch name cannot end with '/'".into());
        }
        if let Some(seq) = Self::FORBIDDEN_SEQUENCES
            .iter()
            .find(|seq| name.contains(**seq))
        {
            return reject(format!("branch name cannot contain '{seq}'"));
        }
        if let Some(c) = Self::FORBIDDEN_CHARS.iter().find(|c| name.contains(**c)) {
            return reject(format!("branch name cannot contain '{c}'"));
        }
        if name.chars().any(|c| c.is_ascii_control()) {
            return reject("branch name cannot contain control characters".into());
        }

        // Per-component rules; empty components are already covered by "//".
        for component in name.split('/').filter(|c| !c.is_empty()) {
            if component.starts_with('.') {
                return reject("path component cannot start with '.'".into());
            }
            if component.ends_with(".lock") {
                return reject("path component cannot end with '.lock'".into());
            }
        }

        Ok(())
    }

    /// Get the branch name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BranchName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BranchName> for String {
    fn from(name: BranchName) -> Self {
        name.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BranchName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A simulated commit identifier.
///
/// Ids are the letter `c` followed by a positive decimal sequence number.
/// The sequence number is what makes ids unique; see
/// [`RepoState::next_commit_id`](crate::core::state::RepoState::next_commit_id).
///
/// # Example
///
/// ```
/// use gitsim::core::types::CommitId;
///
/// let id = CommitId::new("c12").unwrap();
/// assert_eq!(id.seq(), 12);
/// assert!(id.as_str().starts_with("c1"));
///
/// assert!(CommitId::new("c0").is_err());
/// assert!(CommitId::new("c").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitId(String);

impl CommitId {
    /// Create a commit id from its textual form.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidCommitId` unless the string is `c<N>` with
    /// `N >= 1` and no leading zeros.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        let digits = id
            .strip_prefix('c')
            .ok_or_else(|| TypeError::InvalidCommitId(format!("'{id}' must start with 'c'")))?;
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(TypeError::InvalidCommitId(format!(
                "'{id}' must be 'c' followed by digits"
            )));
        }
        if digits.starts_with('0') {
            return Err(TypeError::InvalidCommitId(format!(
                "'{id}' must use a positive sequence number without leading zeros"
            )));
        }
        Ok(Self(id))
    }

    /// Build the id for sequence number `seq`.
    pub fn from_seq(seq: u64) -> Self {
        Self(format!("c{seq}"))
    }

    /// The sequence number encoded in this id.
    pub fn seq(&self) -> u64 {
        // Validated at construction; digits after 'c' always parse.
        self.0[1..].parse().unwrap_or(0)
    }

    /// Get the commit id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CommitId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CommitId> for String {
    fn from(id: CommitId) -> Self {
        id.0
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
