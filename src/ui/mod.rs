//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All terminal output goes through this module so quiet mode and the
//! stdout/stderr split are handled in one place. The engine itself never
//! prints.

pub mod output;
