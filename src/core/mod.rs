//! core
//!
//! The repository model of the simulator.
//!
//! # Modules
//!
//! - [`types`] - Strong types: BranchName, CommitId
//! - [`state`] - Commits, branches, HEAD, stage and working directory
//! - [`graph`] - Commit graph reachability
//! - [`revision`] - `HEAD~N` / branch / id-prefix resolution
//! - [`verify`] - Snapshot invariant verification
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid names and ids at construction
//! - Snapshots are plain values: clone, modify, verify, replace
//! - All verification is deterministic

pub mod config;
pub mod graph;
pub mod revision;
pub mod state;
pub mod types;
pub mod verify;
