//! engine::catalog
//!
//! Descriptions of every supported command and its common options.
//!
//! The catalog feeds the help shown for a bare `git`, the suggestions
//! offered for partial input and the `gitsim commands` listing.

use super::command::Subcommand;

/// A commonly used option of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOption {
    pub option: &'static str,
    pub description: &'static str,
}

/// One supported command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDefinition {
    pub subcommand: Subcommand,
    pub description: &'static str,
    pub options: &'static [CommandOption],
}

impl CommandDefinition {
    /// The full command as typed, e.g. `git commit`.
    pub fn name(&self) -> String {
        format!("git {}", self.subcommand.name())
    }
}

const fn opt(option: &'static str, description: &'static str) -> CommandOption {
    CommandOption {
        option,
        description,
    }
}

/// The display-only `clear` command.
pub const CLEAR: &str = "clear";

/// Description of `clear`.
pub const CLEAR_DESCRIPTION: &str = "Clear the terminal history";

/// Explanation shown for a bare `git`.
pub const GIT_HELP: &str =
    "Git is a version control system. Use \"git <command>\" to run a specific operation.";

/// Every supported command, in display order.
pub const CATALOG: &[CommandDefinition] = &[
    CommandDefinition {
        subcommand: Subcommand::Init,
        description: "Create an empty repository with a main branch",
        options: &[],
    },
    CommandDefinition {
        subcommand: Subcommand::Add,
        description: "Add changes to the staging area",
        options: &[opt(".", "Stage every change in the working directory")],
    },
    CommandDefinition {
        subcommand: Subcommand::Commit,
        description: "Record the staged changes in the repository",
        options: &[
            opt("-m", "Use the given commit message"),
            opt("--allow-empty", "Commit even when nothing is staged"),
        ],
    },
    CommandDefinition {
        subcommand: Subcommand::Branch,
        description: "List, create or delete branches",
        options: &[
            opt("-d", "Delete a fully merged branch"),
            opt("-D", "Delete a branch even if it is not merged"),
        ],
    },
    CommandDefinition {
        subcommand: Subcommand::Checkout,
        description: "Switch branches or move HEAD to a commit",
        options: &[opt("-b", "Create a branch and switch to it")],
    },
    CommandDefinition {
        subcommand: Subcommand::Merge,
        description: "Join another branch into the current one",
        options: &[],
    },
    CommandDefinition {
        subcommand: Subcommand::Rebase,
        description: "Move the current branch on top of another for a linear history",
        options: &[],
    },
    CommandDefinition {
        subcommand: Subcommand::Reset,
        description: "Move HEAD and the current branch to another commit",
        options: &[
            opt("--soft", "Keep the stage and working directory"),
            opt("--mixed", "Unstage changes into the working directory"),
            opt("--hard", "Discard staged and unstaged changes"),
        ],
    },
    CommandDefinition {
        subcommand: Subcommand::Status,
        description: "Show the state of the stage and working directory",
        options: &[],
    },
    CommandDefinition {
        subcommand: Subcommand::Log,
        description: "Show the commit history",
        options: &[],
    },
    CommandDefinition {
        subcommand: Subcommand::Diff,
        description: "Show differences between commits",
        options: &[],
    },
    CommandDefinition {
        subcommand: Subcommand::Fetch,
        description: "Download objects and references from another repository",
        options: &[],
    },
    CommandDefinition {
        subcommand: Subcommand::Pull,
        description: "Integrate changes from a remote repository",
        options: &[],
    },
    CommandDefinition {
        subcommand: Subcommand::Push,
        description: "Update remote references",
        options: &[],
    },
    CommandDefinition {
        subcommand: Subcommand::Stash,
        description: "Shelve local changes in a temporary area",
        options: &[],
    },
    CommandDefinition {
        subcommand: Subcommand::Tag,
        description: "Create, list or delete tags",
        options: &[],
    },
    CommandDefinition {
        subcommand: Subcommand::CherryPick,
        description: "Apply the changes of specific commits",
        options: &[],
    },
];

/// Look up the catalog entry of a subcommand.
pub fn definition(sub: Subcommand) -> &'static CommandDefinition {
    CATALOG
        .iter()
        .find(|def| def.subcommand == sub)
        .unwrap_or(&CATALOG[0])
}

/// Every command name, `git init` first.
pub fn all_names() -> Vec<String> {
    CATALOG.iter().map(CommandDefinition::name).collect()
}

/// Command names to offer for a mistyped subcommand.
///
/// Commands sharing the first letter of `word`; all commands when none do.
pub fn similar_names(word: &str) -> Vec<String> {
    let first = word.chars().next().map(|c| c.to_ascii_lowercase());
    let similar: Vec<String> = CATALOG
        .iter()
        .filter(|def| def.subcommand.name().chars().next() == first)
        .map(CommandDefinition::name)
        .collect();

    if similar.is_empty() {
        all_names()
    } else {
        similar
    }
}
