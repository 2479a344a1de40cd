//! Termination signals while the selector is on screen

use dropshell_core::prelude::*;
use dropshell_core::signals::ShutdownSignals;
use tokio::sync::mpsc;

use crate::message::Message;

/// Forward the first SIGINT/SIGTERM to the selector as [`Message::Quit`]
///
/// Handlers are registered before this returns, so a signal that arrives
/// while the first page is loading still ends the selector. Abort the
/// returned task once the selector is gone; the remote session listens
/// for itself.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> tokio::task::JoinHandle<()> {
    let registered = ShutdownSignals::register();

    tokio::spawn(async move {
        let mut signals = match registered {
            Ok(signals) => signals,
            Err(e) => {
                error!("Signal handler error: {}", e);
                return;
            }
        };

        let name = signals.recv().await;
        info!("{name} received, quitting selector");
        if tx.send(Message::Quit).await.is_err() {
            debug!("Selector gone before {name} could be delivered");
        }
    })
}
