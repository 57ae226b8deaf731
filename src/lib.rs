//! gitsim - An educational Git state simulator
//!
//! gitsim models a tiny Git repository in memory (commits, branches, HEAD,
//! a staging area and a working directory) and interprets a subset of Git
//! commands against it, explaining what each command did. Nothing touches
//! the file system; every command produces a new snapshot.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, drives a session)
//! - [`engine`] - Parse -> Apply -> Verify interpreter and the session
//! - [`core`] - Repository model, strong types, revisions, verification, config
//! - [`ui`] - Output formatting
//!
//! # Correctness Invariants
//!
//! gitsim maintains the following invariants:
//!
//! 1. Exactly one commit is HEAD
//! 2. Branch heads and parents always name existing, earlier commits
//! 3. A rejected command never changes the repository
//! 4. Every snapshot handed out has passed verification

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
