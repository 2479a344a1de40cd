//! How a finished remote shell is judged

use dropshell_core::prelude::*;

/// Exit status a shell reports when the user interrupts it with Ctrl+C
pub const INTERRUPTED_STATUS: u32 = 130;

/// Non-error ways a session can end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The remote shell exited with status 0
    Completed,
    /// The remote shell exited with status 130
    Interrupted,
}

/// What the server reported about the end of the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteExit {
    Status(u32),
    Signal(String),
}

/// Map the server's report onto an outcome
///
/// Only 0 and 130 are acceptable. A missing report counts as a failure.
pub fn classify_exit(exit: Option<RemoteExit>) -> Result<SessionOutcome> {
    match exit {
        Some(RemoteExit::Status(0)) => Ok(SessionOutcome::Completed),
        Some(RemoteExit::Status(INTERRUPTED_STATUS)) => Ok(SessionOutcome::Interrupted),
        Some(RemoteExit::Status(code)) => Err(Error::RemoteExit { code }),
        Some(RemoteExit::Signal(signal)) => Err(Error::RemoteSignal { signal }),
        None => Err(Error::MissingExitStatus),
    }
}

/// Why the byte pump stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The server closed the channel, with whatever exit report it sent
    Closed(Option<RemoteExit>),
    /// SIGINT/SIGTERM reached this process while the shell was running
    LocalSignal(&'static str),
}

/// Judge a finished session
///
/// A local termination signal ends the session the same way a remote
/// Ctrl+C does.
pub fn classify_end(end: SessionEnd) -> Result<SessionOutcome> {
    match end {
        SessionEnd::Closed(exit) => classify_exit(exit),
        SessionEnd::LocalSignal(name) => {
            info!("Session ended locally by {name}");
            Ok(SessionOutcome::Interrupted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_completed() {
        assert_eq!(
            classify_exit(Some(RemoteExit::Status(0))).unwrap(),
            SessionOutcome::Completed
        );
    }

    #[test]
    fn test_130_is_interrupted() {
        assert_eq!(
            classify_exit(Some(RemoteExit::Status(130))).unwrap(),
            SessionOutcome::Interrupted
        );
    }

    #[test]
    fn test_other_status_is_error() {
        for code in [1, 2, 127, 255] {
            let err = classify_exit(Some(RemoteExit::Status(code))).unwrap_err();
            assert!(matches!(err, Error::RemoteExit { code: c } if c == code));
        }
    }

    #[test]
    fn test_signal_is_error() {
        let err = classify_exit(Some(RemoteExit::Signal("KILL".to_string()))).unwrap_err();
        assert!(matches!(err, Error::RemoteSignal { .. }));
    }

    #[test]
    fn test_missing_status_is_error() {
        assert!(matches!(
            classify_exit(None).unwrap_err(),
            Error::MissingExitStatus
        ));
    }

    #[test]
    fn test_local_signal_is_interrupted() {
        assert_eq!(
            classify_end(SessionEnd::LocalSignal("SIGTERM")).unwrap(),
            SessionOutcome::Interrupted
        );
    }

    #[test]
    fn test_closed_channel_uses_remote_report() {
        assert_eq!(
            classify_end(SessionEnd::Closed(Some(RemoteExit::Status(0)))).unwrap(),
            SessionOutcome::Completed
        );
        assert!(matches!(
            classify_end(SessionEnd::Closed(None)).unwrap_err(),
            Error::MissingExitStatus
        ));
    }
}
