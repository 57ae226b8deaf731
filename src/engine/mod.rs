//! engine
//!
//! The command interpreter: Parse -> Apply -> Verify -> Commit snapshot.
//!
//! # Architecture
//!
//! ```text
//! line --parse--> Invocation --apply--> Transition --verify--> Session
//! ```
//!
//! 1. **Parse**: tokenize a line into an [`Invocation`]; no state is read
//! 2. **Apply**: [`apply`] dispatches the [`GitCommand`] to its handler,
//!    which builds the next snapshot on a clone
//! 3. **Verify**: the new snapshot must pass [`crate::core::verify::verify`]
//! 4. **Commit**: [`Session`] replaces its snapshot on success only
//!
//! # Invariants
//!
//! - Handlers never mutate the snapshot they were given
//! - A rejected command leaves the session's repository untouched
//! - Verification failure after a handler indicates a bug
//!
//! # Example
//!
//! ```
//! use gitsim::core::config::Config;
//! use gitsim::engine::Session;
//!
//! let mut session = Session::new(Config::default());
//! session.submit("git checkout -b feature");
//! session.submit("git add login.rs");
//! session.submit("git commit -m \"add login\"");
//!
//! let state = session.state();
//! assert_eq!(state.branch("feature").unwrap().head.as_str(), "c2");
//! assert_eq!(state.branch("main").unwrap().head.as_str(), "c1");
//! ```

pub mod catalog;
pub mod command;
pub mod error;
pub mod exec;
mod handlers;
pub mod parse;
pub mod session;
pub mod suggest;

pub use command::{AddTarget, BranchAction, CheckoutTarget, GitCommand, ResetMode, StubCommand};
pub use error::{RefKind, SimError};
pub use exec::{apply, Transition};
pub use parse::{parse_line, Invocation};
pub use session::{Outcome, Session};
pub use suggest::suggest;
