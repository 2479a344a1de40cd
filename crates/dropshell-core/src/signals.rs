//! Process termination signals
//!
//! Once registered, tokio owns SIGINT and SIGTERM for the rest of the
//! process, so every phase that can block (the selector loop, a remote
//! session) has to hold a [`ShutdownSignals`] of its own and act on it.

use crate::error::{Error, Result};

/// Listener for SIGINT/SIGTERM (Ctrl+C on Windows)
pub struct ShutdownSignals {
    #[cfg(unix)]
    sigint: tokio::signal::unix::Signal,
    #[cfg(unix)]
    sigterm: tokio::signal::unix::Signal,
    #[cfg(windows)]
    ctrl_c: tokio::signal::windows::CtrlC,
}

impl ShutdownSignals {
    /// Install the handlers; must be called inside a tokio runtime
    pub fn register() -> Result<Self> {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let sigint = signal(SignalKind::interrupt())
                .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {e}")))?;
            let sigterm = signal(SignalKind::terminate())
                .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {e}")))?;
            Ok(Self { sigint, sigterm })
        }

        #[cfg(windows)]
        {
            let ctrl_c = tokio::signal::windows::ctrl_c()
                .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {e}")))?;
            Ok(Self { ctrl_c })
        }
    }

    /// Wait for the next signal and return its name
    pub async fn recv(&mut self) -> &'static str {
        #[cfg(unix)]
        {
            tokio::select! {
                Some(()) = self.sigint.recv() => "SIGINT",
                Some(()) = self.sigterm.recv() => "SIGTERM",
                else => std::future::pending::<&'static str>().await,
            }
        }

        #[cfg(windows)]
        {
            match self.ctrl_c.recv().await {
                Some(()) => "Ctrl+C",
                None => std::future::pending::<&'static str>().await,
            }
        }
    }
}
