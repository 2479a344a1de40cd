//! Local terminal plumbing for the foreground session

use std::io::Read;

use dropshell_core::prelude::*;
use tokio::sync::mpsc;

const STDIN_CHUNK: usize = 1024;

/// Current terminal size as `(columns, rows)`
pub(crate) fn size() -> Result<(u32, u32)> {
    let (cols, rows) = crossterm::terminal::size().map_err(|e| Error::TerminalSize {
        message: e.to_string(),
    })?;
    Ok((u32::from(cols), u32::from(rows)))
}

/// Keeps the local terminal in raw mode until dropped
pub(crate) struct RawModeGuard;

impl RawModeGuard {
    pub(crate) fn enable() -> Result<Self> {
        crossterm::terminal::enable_raw_mode()
            .map_err(|e| Error::TerminalInit(format!("failed to enter raw mode: {e}")))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = crossterm::terminal::disable_raw_mode() {
            warn!("Failed to leave raw mode: {e}");
        }
    }
}

/// Forward raw stdin bytes into a channel
///
/// The reader blocks on stdin with no way to interrupt it, so it runs on a
/// detached OS thread instead of the runtime's blocking pool; a pool thread
/// would keep the runtime from shutting down after the session ends.
pub(crate) fn spawn_stdin_pump() -> mpsc::Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel(64);

    let spawned = std::thread::Builder::new()
        .name("dropshell-stdin".to_string())
        .spawn(move || {
            let mut stdin = std::io::stdin();
            let mut buf = [0u8; STDIN_CHUNK];
            loop {
                match stdin.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => {
                        if tx.blocking_send(buf[..n].to_vec()).is_err() {
                            break;
                        }
                    }
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        warn!("stdin read failed: {e}");
                        break;
                    }
                }
            }
        });

    if let Err(e) = spawned {
        // Dropping the sender leaves the receiver closed, which the session
        // treats as local EOF.
        error!("Failed to spawn stdin reader: {e}");
    }

    rx
}

/// Terminal resize notifications (SIGWINCH)
pub(crate) struct ResizeEvents {
    #[cfg(unix)]
    signal: Option<tokio::signal::unix::Signal>,
}

impl ResizeEvents {
    pub(crate) fn new() -> Self {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let signal = match signal(SignalKind::window_change()) {
                Ok(s) => Some(s),
                Err(e) => {
                    warn!("Failed to install SIGWINCH handler: {e}");
                    None
                }
            };
            Self { signal }
        }

        #[cfg(not(unix))]
        {
            Self {}
        }
    }

    /// Wait for the next resize; never resolves where resizes are not observable
    pub(crate) async fn recv(&mut self) {
        #[cfg(unix)]
        if let Some(signal) = self.signal.as_mut() {
            if signal.recv().await.is_some() {
                return;
            }
            self.signal = None;
        }

        std::future::pending::<()>().await
    }
}
