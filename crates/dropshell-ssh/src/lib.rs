//! # dropshell-ssh - Remote Shell Sessions
//!
//! Opens one interactive shell on a remote host over SSH and hands it the
//! local terminal until the shell ends.
//!
//! ## Public API
//!
//! - [`SessionLauncher`] / [`LocalSessionLauncher`] - launch seam used by the binary
//! - [`SshLauncher`], [`SshConfig`] - `russh` backed implementation
//! - [`SessionOutcome`], [`SessionEnd`], [`classify_end()`], [`classify_exit()`] - outcome classification
//! - [`HostKeyPolicy`] - server key verification option

pub mod error;
pub mod handler;
pub mod launcher;
pub mod outcome;
mod terminal;

pub use error::SshError;
pub use handler::{ClientHandler, HostKeyPolicy};
pub use launcher::{LocalSessionLauncher, SessionLauncher, SshConfig, SshLauncher};
pub use outcome::{classify_end, classify_exit, RemoteExit, SessionEnd, SessionOutcome};
