//! engine::command
//!
//! The closed set of commands the interpreter understands.
//!
//! # Architecture
//!
//! Parsing turns a token list into a [`GitCommand`]; every variant carries
//! the arguments its handler needs, so [`crate::engine::apply`] matches
//! exhaustively and a new command cannot be added without a handler.
//!
//! [`Subcommand`] is the name table: canonical names, aliases, and the
//! mapping from a typed word to a command family.

/// A parsed `git` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCommand {
    /// Reset the repository to its canonical initial state.
    Init,
    /// Move files into the staging area.
    Add(AddTarget),
    /// Record the staged files as a new commit.
    Commit {
        message: Option<String>,
        allow_empty: bool,
    },
    /// List, create or delete branches.
    Branch(BranchAction),
    /// Move HEAD to a branch or commit.
    Checkout(CheckoutTarget),
    /// Create a merge commit with `branch` as second parent.
    Merge { branch: String },
    /// Replay the current branch onto `onto` as one synthetic commit.
    Rebase { onto: String },
    /// Move HEAD (and the current branch) to `target`.
    Reset { mode: ResetMode, target: String },
    /// Summarize stage and working directory.
    Status,
    /// Commands with an explanation but no effect on the model.
    Stub(StubCommand),
}

/// What `git add` stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTarget {
    /// `git add .`
    All,
    /// `git add <file>...`
    Files(Vec<String>),
}

/// Sub-operation of `git branch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchAction {
    List,
    Create {
        name: String,
        start_point: Option<String>,
    },
    Delete {
        name: String,
        force: bool,
    },
}

/// Target of `git checkout`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutTarget {
    /// `checkout -b <name>`
    Create { name: String },
    /// `checkout <branch|commit>`
    Existing { target: String },
}

/// How `git reset` treats the stage and working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetMode {
    /// Leave stage and working directory alone.
    Soft,
    /// Unstage everything into the working directory.
    #[default]
    Mixed,
    /// Discard stage and working directory.
    Hard,
}

impl ResetMode {
    /// Parse a `--soft`/`--mixed`/`--hard` flag.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "--soft" => Some(ResetMode::Soft),
            "--mixed" => Some(ResetMode::Mixed),
            "--hard" => Some(ResetMode::Hard),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> &'static str {
        match self {
            ResetMode::Soft => "--soft",
            ResetMode::Mixed => "--mixed",
            ResetMode::Hard => "--hard",
        }
    }
}

/// Commands accepted for teaching purposes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubCommand {
    Log,
    Diff,
    Fetch,
    Pull,
    Push,
    Stash,
    Tag,
    CherryPick,
}

impl StubCommand {
    /// The fixed explanation shown when the stub runs.
    pub fn explanation(&self) -> &'static str {
        match self {
            StubCommand::Log => "git log: shows the commit history.",
            StubCommand::Diff => {
                "git diff: shows changes between commits, the stage and the working directory."
            }
            StubCommand::Fetch => {
                "git fetch: downloads objects and references from another repository."
            }
            StubCommand::Pull => "git pull: fetches and integrates changes from a remote repository.",
            StubCommand::Push => "git push: updates remote references along with their objects.",
            StubCommand::Stash => {
                "git stash: temporarily shelves changes that are not ready to be committed."
            }
            StubCommand::Tag => "git tag: creates, lists or deletes tags.",
            StubCommand::CherryPick => {
                "git cherry-pick: applies the changes introduced by existing commits."
            }
        }
    }
}

/// A command family as typed after `git`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcommand {
    Init,
    Add,
    Commit,
    Branch,
    Checkout,
    Merge,
    Rebase,
    Reset,
    Status,
    Log,
    Diff,
    Fetch,
    Pull,
    Push,
    Stash,
    Tag,
    CherryPick,
}

impl Subcommand {
    /// Every subcommand in catalog order.
    pub const ALL: [Subcommand; 17] = [
        Subcommand::Init,
        Subcommand::Add,
        Subcommand::Commit,
        Subcommand::Branch,
        Subcommand::Checkout,
        Subcommand::Merge,
        Subcommand::Rebase,
        Subcommand::Reset,
        Subcommand::Status,
        Subcommand::Log,
        Subcommand::Diff,
        Subcommand::Fetch,
        Subcommand::Pull,
        Subcommand::Push,
        Subcommand::Stash,
        Subcommand::Tag,
        Subcommand::CherryPick,
    ];

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Subcommand::Init => "init",
            Subcommand::Add => "add",
            Subcommand::Commit => "commit",
            Subcommand::Branch => "branch",
            Subcommand::Checkout => "checkout",
            Subcommand::Merge => "merge",
            Subcommand::Rebase => "rebase",
            Subcommand::Reset => "reset",
            Subcommand::Status => "status",
            Subcommand::Log => "log",
            Subcommand::Diff => "diff",
            Subcommand::Fetch => "fetch",
            Subcommand::Pull => "pull",
            Subcommand::Push => "push",
            Subcommand::Stash => "stash",
            Subcommand::Tag => "tag",
            Subcommand::CherryPick => "cherry-pick",
        }
    }

    /// Short aliases accepted in place of the canonical name.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Subcommand::Commit => &["ci", "cmt"],
            Subcommand::Branch => &["br"],
            Subcommand::Checkout => &["co", "switch"],
            Subcommand::Merge => &["mg"],
            Subcommand::Rebase => &["rb"],
            Subcommand::Reset => &["rs"],
            Subcommand::Status => &["st"],
            Subcommand::CherryPick => &["cp"],
            _ => &[],
        }
    }

    /// Look up a typed word (case-insensitive) by name or alias.
    pub fn from_word(word: &str) -> Option<Self> {
        let word = word.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|sub| sub.name() == word || sub.aliases().contains(&word.as_str()))
    }
}

impl std::fmt::Display for Subcommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
