//! engine::parse
//!
//! Tokenizer and parser for command lines.
//!
//! A line is split on whitespace. The first token decides the path:
//! `git` goes to [`parse_git`], `clear` clears the display, anything else is
//! rejected. Parsing is pure and never looks at repository state; reference
//! checks happen in the handlers.

use super::catalog;
use super::command::{
    AddTarget, BranchAction, CheckoutTarget, GitCommand, ResetMode, StubCommand, Subcommand,
};
use super::error::SimError;

/// Message used when `git commit` gets no `-m`.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Commit without message";

/// A whole input line, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Blank input.
    Empty,
    /// `clear`: wipe the display history.
    Clear,
    /// `git` on its own.
    GitHelp,
    /// `git <subcommand> ...`
    Git(GitCommand),
}

/// Split a line into whitespace-separated tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Classify and parse a full input line.
///
/// # Example
///
/// ```
/// use gitsim::engine::parse::{parse_line, Invocation};
/// use gitsim::engine::command::GitCommand;
///
/// assert_eq!(parse_line("  ").unwrap(), Invocation::Empty);
/// assert_eq!(parse_line("git status").unwrap(), Invocation::Git(GitCommand::Status));
/// assert!(parse_line("ls -la").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<Invocation, SimError> {
    let tokens = tokenize(line);
    match tokens.split_first() {
        None => Ok(Invocation::Empty),
        Some((&"clear", [])) => Ok(Invocation::Clear),
        Some((&"git", [])) => Ok(Invocation::GitHelp),
        Some((&"git", args)) => parse_git(args).map(Invocation::Git),
        Some((first, _)) => Err(SimError::UnrecognizedCommand(first.to_string())),
    }
}

/// Parse the tokens after `git`. `args` must be non-empty.
pub fn parse_git(args: &[&str]) -> Result<GitCommand, SimError> {
    let (word, rest) = args.split_first().ok_or(SimError::MissingArgument {
        command: "git",
        message: "expected a subcommand",
    })?;

    let sub = Subcommand::from_word(word).ok_or_else(|| SimError::UnknownSubcommand {
        name: word.to_lowercase(),
        suggestions: catalog::similar_names(word),
    })?;

    match sub {
        Subcommand::Init => Ok(GitCommand::Init),
        Subcommand::Status => Ok(GitCommand::Status),
        Subcommand::Add => parse_add(rest),
        Subcommand::Commit => parse_commit(rest),
        Subcommand::Branch => parse_branch(rest),
        Subcommand::Checkout => parse_checkout(rest),
        Subcommand::Merge => {
            let branch = single_operand(
                rest,
                "merge",
                "specify a branch to merge, e.g. git merge <branch>",
            )?;
            Ok(GitCommand::Merge { branch })
        }
        Subcommand::Rebase => {
            let onto = single_operand(
                rest,
                "rebase",
                "specify a base branch, e.g. git rebase <branch>",
            )?;
            Ok(GitCommand::Rebase { onto })
        }
        Subcommand::Reset => parse_reset(rest),
        Subcommand::Log => Ok(GitCommand::Stub(StubCommand::Log)),
        Subcommand::Diff => Ok(GitCommand::Stub(StubCommand::Diff)),
        Subcommand::Fetch => Ok(GitCommand::Stub(StubCommand::Fetch)),
        Subcommand::Pull => Ok(GitCommand::Stub(StubCommand::Pull)),
        Subcommand::Push => Ok(GitCommand::Stub(StubCommand::Push)),
        Subcommand::Stash => Ok(GitCommand::Stub(StubCommand::Stash)),
        Subcommand::Tag => Ok(GitCommand::Stub(StubCommand::Tag)),
        Subcommand::CherryPick => Ok(GitCommand::Stub(StubCommand::CherryPick)),
    }
}

fn parse_add(args: &[&str]) -> Result<GitCommand, SimError> {
    match args {
        [] => Err(SimError::MissingArgument {
            command: "add",
            message: "specify a file to stage, e.g. git add <file>",
        }),
        [".", ..] => Ok(GitCommand::Add(AddTarget::All)),
        files => Ok(GitCommand::Add(AddTarget::Files(
            files.iter().map(|f| f.to_string()).collect(),
        ))),
    }
}

fn parse_commit(args: &[&str]) -> Result<GitCommand, SimError> {
    let mut allow_empty = false;
    let mut message = None;
    let mut rest = args;

    while let Some((arg, tail)) = rest.split_first() {
        rest = tail;
        match *arg {
            "--allow-empty" => allow_empty = true,
            "-m" | "--message" => {
                // A quoted message ends at its closing quote; flags may follow.
                if let Some((text, after)) = quoted_message(tail) {
                    message = Some(text);
                    rest = after;
                    continue;
                }
                let text = tail.join(" ");
                if text.is_empty() {
                    return Err(SimError::MissingArgument {
                        command: "commit",
                        message: "option -m requires a message",
                    });
                }
                message = Some(text);
                break;
            }
            flag if flag.starts_with('-') => {
                return Err(SimError::UnknownOption {
                    command: "commit",
                    option: flag.to_string(),
                })
            }
            // Pathspecs are not modelled.
            _ => {}
        }
    }

    Ok(GitCommand::Commit {
        message,
        allow_empty,
    })
}

fn parse_branch(args: &[&str]) -> Result<GitCommand, SimError> {
    match args {
        [] => Ok(GitCommand::Branch(BranchAction::List)),
        [flag @ ("-d" | "-D" | "--delete"), rest @ ..] => {
            let name = rest.first().ok_or(SimError::MissingArgument {
                command: "branch",
                message: "specify the branch to delete",
            })?;
            Ok(GitCommand::Branch(BranchAction::Delete {
                name: name.to_string(),
                force: *flag == "-D",
            }))
        }
        [flag, ..] if flag.starts_with('-') => Err(SimError::UnknownOption {
            command: "branch",
            option: flag.to_string(),
        }),
        [name, rest @ ..] => Ok(GitCommand::Branch(BranchAction::Create {
            name: name.to_string(),
            start_point: rest.first().map(|s| s.to_string()),
        })),
    }
}

fn parse_checkout(args: &[&str]) -> Result<GitCommand, SimError> {
    match args {
        [] => Err(SimError::MissingArgument {
            command: "checkout",
            message: "specify a branch or commit to check out",
        }),
        ["-b" | "-c", rest @ ..] => {
            let name = rest.first().ok_or(SimError::MissingArgument {
                command: "checkout",
                message: "specify a name for the new branch",
            })?;
            Ok(GitCommand::Checkout(CheckoutTarget::Create {
                name: name.to_string(),
            }))
        }
        [flag, ..] if flag.starts_with('-') => Err(SimError::UnknownOption {
            command: "checkout",
            option: flag.to_string(),
        }),
        [target, ..] => Ok(GitCommand::Checkout(CheckoutTarget::Existing {
            target: target.to_string(),
        })),
    }
}

fn parse_reset(args: &[&str]) -> Result<GitCommand, SimError> {
    match args {
        [] => Err(SimError::MissingArgument {
            command: "reset",
            message: "specify a mode and a commit, e.g. git reset --hard HEAD~1",
        }),
        [flag, rest @ ..] if flag.starts_with('-') => {
            let mode = ResetMode::from_flag(flag).ok_or_else(|| SimError::UnknownOption {
                command: "reset",
                option: flag.to_string(),
            })?;
            Ok(GitCommand::Reset {
                mode,
                target: rest.first().unwrap_or(&"HEAD~1").to_string(),
            })
        }
        [target, ..] => Ok(GitCommand::Reset {
            mode: ResetMode::default(),
            target: target.to_string(),
        }),
    }
}

/// The first operand of a command taking exactly one reference.
fn single_operand(
    args: &[&str],
    command: &'static str,
    missing: &'static str,
) -> Result<String, SimError> {
    match args.first() {
        None => Err(SimError::MissingArgument {
            command,
            message: missing,
        }),
        Some(flag) if flag.starts_with('-') => Err(SimError::UnknownOption {
            command,
            option: flag.to_string(),
        }),
        Some(operand) => Ok(operand.to_string()),
    }
}

/// Split a leading quoted message off `args`.
///
/// Returns the text between the quotes and the tokens after the closing one,
/// or `None` when `args` does not open with a quote or never closes it.
fn quoted_message<'a, 'b>(args: &'b [&'a str]) -> Option<(String, &'b [&'a str])> {
    let quote = args
        .first()?
        .chars()
        .next()
        .filter(|c| matches!(*c, '"' | '\''))?;

    // The opening token needs room for at least one character of message.
    let end = args.iter().enumerate().position(|(i, token)| {
        let min_len = if i == 0 { 3 } else { 1 };
        token.len() >= min_len && token.ends_with(quote)
    })?;

    let joined = args[..=end].join(" ");
    Some((joined[1..joined.len() - 1].to_string(), &args[end + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git(line: &str) -> Result<GitCommand, SimError> {
        match parse_line(line)? {
            Invocation::Git(cmd) => Ok(cmd),
            other => panic!("expected git command, got {:?}", other),
        }
    }

    mod top_level {
        use super::*;

        #[test]
        fn blank_and_clear() {
            assert_eq!(parse_line("").unwrap(), Invocation::Empty);
            assert_eq!(parse_line("   \t ").unwrap(), Invocation::Empty);
            assert_eq!(parse_line("clear").unwrap(), Invocation::Clear);
            assert_eq!(parse_line("  git  ").unwrap(), Invocation::GitHelp);
        }

        #[test]
        fn non_git_rejected() {
            assert_eq!(
                parse_line("svn commit").unwrap_err(),
                SimError::UnrecognizedCommand("svn".into())
            );
            // `clear` with arguments is not the clear command.
            assert!(parse_line("clear all").is_err());
        }

        #[test]
        fn unknown_subcommand_carries_suggestions() {
            match parse_line("git comit").unwrap_err() {
                SimError::UnknownSubcommand { name, suggestions } => {
                    assert_eq!(name, "comit");
                    assert!(suggestions.contains(&"git commit".to_string()));
                }
                other => panic!("unexpected {:?}", other),
            }
        }

        #[test]
        fn subcommand_is_case_insensitive() {
            assert_eq!(git("git STATUS").unwrap(), GitCommand::Status);
        }

        #[test]
        fn stubs_ignore_arguments() {
            assert_eq!(
                git("git log --oneline").unwrap(),
                GitCommand::Stub(StubCommand::Log)
            );
            assert_eq!(
                git("git cp c2").unwrap(),
                GitCommand::Stub(StubCommand::CherryPick)
            );
        }
    }

    mod add {
        use super::*;

        #[test]
        fn requires_argument() {
            assert!(matches!(
                git("git add"),
                Err(SimError::MissingArgument { command: "add", .. })
            ));
        }

        #[test]
        fn dot_means_all() {
            assert_eq!(git("git add .").unwrap(), GitCommand::Add(AddTarget::All));
        }

        #[test]
        fn named_files() {
            assert_eq!(
                git("git add a.txt b.txt").unwrap(),
                GitCommand::Add(AddTarget::Files(vec!["a.txt".into(), "b.txt".into()]))
            );
        }
    }

    mod commit {
        use super::*;

        #[test]
        fn message_takes_rest_of_line() {
            assert_eq!(
                git("git commit -m fix the login bug").unwrap(),
                GitCommand::Commit {
                    message: Some("fix the login bug".into()),
                    allow_empty: false,
                }
            );
        }

        #[test]
        fn quotes_stripped() {
            let expected = GitCommand::Commit {
                message: Some("add login".into()),
                allow_empty: false,
            };
            assert_eq!(git("git commit -m \"add login\"").unwrap(), expected);
            assert_eq!(git("git ci -m 'add login'").unwrap(), expected);
        }

        #[test]
        fn no_message() {
            assert_eq!(
                git("git commit").unwrap(),
                GitCommand::Commit {
                    message: None,
                    allow_empty: false,
                }
            );
        }

        #[test]
        fn allow_empty_before_message() {
            assert_eq!(
                git("git commit --allow-empty -m wip").unwrap(),
                GitCommand::Commit {
                    message: Some("wip".into()),
                    allow_empty: true,
                }
            );
        }

        #[test]
        fn dangling_message_flag() {
            assert!(matches!(
                git("git commit -m"),
                Err(SimError::MissingArgument { command: "commit", .. })
            ));
        }

        #[test]
        fn unknown_flag() {
            assert_eq!(
                git("git commit --amend").unwrap_err(),
                SimError::UnknownOption {
                    command: "commit",
                    option: "--amend".into(),
                }
            );
        }

        #[test]
        fn flags_after_quoted_message() {
            assert_eq!(
                git("git commit -m \"add login\" --allow-empty").unwrap(),
                GitCommand::Commit {
                    message: Some("add login".into()),
                    allow_empty: true,
                }
            );
            assert!(matches!(
                git("git commit -m 'wip' --amend"),
                Err(SimError::UnknownOption { command: "commit", .. })
            ));
        }

        #[test]
        fn quoted_span_ends_at_first_closing_quote() {
            assert_eq!(
                git("git commit -m \"one\" two").unwrap(),
                GitCommand::Commit {
                    message: Some("one".into()),
                    allow_empty: false,
                }
            );
        }

        #[test]
        fn unclosed_quote_keeps_rest_of_line() {
            assert_eq!(
                git("git commit -m \"half done").unwrap(),
                GitCommand::Commit {
                    message: Some("\"half done".into()),
                    allow_empty: false,
                }
            );
        }
    }

    mod branch {
        use super::*;

        #[test]
        fn list() {
            assert_eq!(git("git branch").unwrap(), GitCommand::Branch(BranchAction::List));
        }

        #[test]
        fn create_with_start_point() {
            assert_eq!(
                git("git br topic c1").unwrap(),
                GitCommand::Branch(BranchAction::Create {
                    name: "topic".into(),
                    start_point: Some("c1".into()),
                })
            );
        }

        #[test]
        fn delete_variants() {
            assert_eq!(
                git("git branch -d topic").unwrap(),
                GitCommand::Branch(BranchAction::Delete {
                    name: "topic".into(),
                    force: false,
                })
            );
            assert_eq!(
                git("git branch -D topic").unwrap(),
                GitCommand::Branch(BranchAction::Delete {
                    name: "topic".into(),
                    force: true,
                })
            );
        }

        #[test]
        fn delete_requires_name() {
            assert!(matches!(
                git("git branch -d"),
                Err(SimError::MissingArgument { command: "branch", .. })
            ));
        }

        #[test]
        fn unknown_option() {
            assert!(matches!(
                git("git branch -m old new"),
                Err(SimError::UnknownOption { command: "branch", .. })
            ));
        }
    }

    mod checkout {
        use super::*;

        #[test]
        fn existing_target() {
            assert_eq!(
                git("git co main").unwrap(),
                GitCommand::Checkout(CheckoutTarget::Existing {
                    target: "main".into()
                })
            );
        }

        #[test]
        fn create_branch() {
            let expected = GitCommand::Checkout(CheckoutTarget::Create {
                name: "feature".into(),
            });
            assert_eq!(git("git checkout -b feature").unwrap(), expected);
            assert_eq!(git("git switch -c feature").unwrap(), expected);
        }

        #[test]
        fn missing_arguments() {
            assert!(git("git checkout").is_err());
            assert!(git("git checkout -b").is_err());
        }
    }

    mod merge_rebase {
        use super::*;

        #[test]
        fn operands() {
            assert_eq!(
                git("git merge feature").unwrap(),
                GitCommand::Merge {
                    branch: "feature".into()
                }
            );
            assert_eq!(
                git("git rb main").unwrap(),
                GitCommand::Rebase { onto: "main".into() }
            );
        }

        #[test]
        fn missing_operand() {
            assert!(matches!(
                git("git merge"),
                Err(SimError::MissingArgument { command: "merge", .. })
            ));
            assert!(matches!(
                git("git rebase"),
                Err(SimError::MissingArgument { command: "rebase", .. })
            ));
        }

        #[test]
        fn options_rejected() {
            assert!(matches!(
                git("git rebase -i main"),
                Err(SimError::UnknownOption { command: "rebase", .. })
            ));
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn requires_argument() {
            assert!(git("git reset").is_err());
        }

        #[test]
        fn target_only_defaults_to_mixed() {
            assert_eq!(
                git("git reset c1").unwrap(),
                GitCommand::Reset {
                    mode: ResetMode::Mixed,
                    target: "c1".into(),
                }
            );
        }

        #[test]
        fn mode_without_target_defaults_to_parent() {
            assert_eq!(
                git("git reset --hard").unwrap(),
                GitCommand::Reset {
                    mode: ResetMode::Hard,
                    target: "HEAD~1".into(),
                }
            );
        }

        #[test]
        fn unknown_mode() {
            assert_eq!(
                git("git reset --keep c1").unwrap_err(),
                SimError::UnknownOption {
                    command: "reset",
                    option: "--keep".into(),
                }
            );
        }
    }
}
