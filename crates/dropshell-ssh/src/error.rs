//! Transport-level errors raised inside the `russh` client handler

use thiserror::Error;

/// Error type for [`ClientHandler`](crate::ClientHandler)
///
/// `russh` requires the handler error to absorb its own error type. These
/// never reach callers directly; the launcher maps them onto
/// `dropshell_core::Error` at each establishment step.
#[derive(Debug, Error)]
pub enum SshError {
    #[error(transparent)]
    Transport(#[from] russh::Error),

    /// Also raised when the key changed since it was recorded
    #[error("host key verification for {host} failed: {message}")]
    HostKeyCheck { host: String, message: String },
}
