//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("the environment variable {var} is not set")]
    MissingCredential { var: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration in {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // Remote Listing Errors
    // ─────────────────────────────────────────────────────────────
    #[error("API request failed: {message}")]
    Api { message: String },

    #[error("API returned HTTP {status}: {message}")]
    ApiStatus { status: u16, message: String },

    #[error("API rejected the access token (unauthenticated)")]
    Unauthenticated,

    // ─────────────────────────────────────────────────────────────
    // Session Establishment Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Instance {name} has no public address to connect to")]
    NoAddress { name: String },

    #[error("Failed to load private key {path}: {message}")]
    KeyLoad { path: PathBuf, message: String },

    #[error("Failed to connect to {address}: {message}")]
    Connect { address: String, message: String },

    #[error("Authentication as {user} on {address} was rejected")]
    AuthRejected { user: String, address: String },

    #[error("Failed to open session channel: {message}")]
    SessionChannel { message: String },

    #[error("Failed to query terminal size: {message}")]
    TerminalSize { message: String },

    #[error("Failed to request PTY: {message}")]
    Pty { message: String },

    #[error("Failed to start shell: {message}")]
    Shell { message: String },

    // ─────────────────────────────────────────────────────────────
    // Session Runtime Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Remote shell exited with status {code}")]
    RemoteExit { code: u32 },

    #[error("Remote shell was killed by signal {signal}")]
    RemoteSignal { signal: String },

    #[error("Remote shell ended without reporting an exit status")]
    MissingExitStatus,

    #[error("SSH session I/O failed: {message}")]
    SessionIo { message: String },
}

/// Coarse classification used when logging fatal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    RemoteFetch,
    SessionEstablishment,
    SessionRuntime,
    Terminal,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::RemoteFetch => "remote-fetch",
            ErrorCategory::SessionEstablishment => "session-establishment",
            ErrorCategory::SessionRuntime => "session-runtime",
            ErrorCategory::Terminal => "terminal",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(label)
    }
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn missing_credential(var: impl Into<String>) -> Self {
        Self::MissingCredential { var: var.into() }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    pub fn api_status(status: u16, message: impl Into<String>) -> Self {
        Self::ApiStatus {
            status,
            message: message.into(),
        }
    }

    pub fn key_load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::KeyLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn connect(address: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Connect {
            address: address.into(),
            message: message.into(),
        }
    }

    pub fn session_channel(message: impl Into<String>) -> Self {
        Self::SessionChannel {
            message: message.into(),
        }
    }

    pub fn pty(message: impl Into<String>) -> Self {
        Self::Pty {
            message: message.into(),
        }
    }

    pub fn shell(message: impl Into<String>) -> Self {
        Self::Shell {
            message: message.into(),
        }
    }

    pub fn session_io(message: impl Into<String>) -> Self {
        Self::SessionIo {
            message: message.into(),
        }
    }

    /// Which failure class this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::MissingCredential { .. } | Error::Config { .. } | Error::ConfigInvalid { .. } => {
                ErrorCategory::Configuration
            }
            Error::Api { .. } | Error::ApiStatus { .. } | Error::Unauthenticated => {
                ErrorCategory::RemoteFetch
            }
            Error::NoAddress { .. }
            | Error::KeyLoad { .. }
            | Error::Connect { .. }
            | Error::AuthRejected { .. }
            | Error::SessionChannel { .. }
            | Error::TerminalSize { .. }
            | Error::Pty { .. }
            | Error::Shell { .. } => ErrorCategory::SessionEstablishment,
            Error::RemoteExit { .. }
            | Error::RemoteSignal { .. }
            | Error::MissingExitStatus
            | Error::SessionIo { .. } => ErrorCategory::SessionRuntime,
            Error::Terminal { .. } | Error::TerminalInit(_) | Error::TerminalRestore(_) => {
                ErrorCategory::Terminal
            }
            Error::Io(_) => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_names_variable() {
        let err = Error::missing_credential("DIGITALOCEAN_ACCESS_TOKEN");
        assert_eq!(
            err.to_string(),
            "the environment variable DIGITALOCEAN_ACCESS_TOKEN is not set"
        );
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn test_fetch_errors_are_remote_fetch() {
        assert_eq!(Error::Unauthenticated.category(), ErrorCategory::RemoteFetch);
        assert_eq!(
            Error::api_status(500, "boom").category(),
            ErrorCategory::RemoteFetch
        );
        assert_eq!(Error::api("timeout").category(), ErrorCategory::RemoteFetch);
    }

    #[test]
    fn test_establishment_steps_are_distinguishable() {
        let errors = [
            Error::key_load("/tmp/id_rsa", "bad format"),
            Error::connect("203.0.113.1:22", "refused"),
            Error::AuthRejected {
                user: "root".to_string(),
                address: "203.0.113.1:22".to_string(),
            },
            Error::session_channel("closed"),
            Error::pty("denied"),
            Error::shell("denied"),
        ];

        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert!(errors
            .iter()
            .all(|e| e.category() == ErrorCategory::SessionEstablishment));
    }

    #[test]
    fn test_remote_exit_is_runtime() {
        let err = Error::RemoteExit { code: 1 };
        assert_eq!(err.to_string(), "Remote shell exited with status 1");
        assert_eq!(err.category(), ErrorCategory::SessionRuntime);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(
            ErrorCategory::SessionEstablishment.to_string(),
            "session-establishment"
        );
    }
}
