//! Selector lifecycle and event loop
//!
//! - `run_selector`: takes the terminal, runs the loop, gives it back
//! - `run_loop`: drains page results, draws, polls the keyboard

use std::sync::Arc;

use dropshell_api::PageSource;
use dropshell_app::actions::handle_action;
use dropshell_app::process::process_message;
use dropshell_app::{handler, signals, Message, SelectorExit, SelectorState};
use dropshell_core::prelude::*;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the interactive selector until the user selects, quits, or the
/// first page cannot be fetched
///
/// The terminal is restored before this returns, whatever the outcome.
pub async fn run_selector<S>(source: Arc<S>, page_size: u32) -> Result<SelectorExit>
where
    S: PageSource + Sync + 'static,
{
    let mut term = terminal::enter()?;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);

    // Sends Message::Quit on SIGINT/SIGTERM
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    let (state, first_fetch) = handler::start(page_size);
    info!("Selector starting (page size {})", state.page_size);
    handle_action(first_fetch, source.clone(), msg_tx.clone());

    let result = run_loop(&mut term, state, msg_rx, &source, &msg_tx);

    signal_task.abort();
    let restored = terminal::leave();

    let exit = result?;
    restored?;
    Ok(exit)
}

fn run_loop<S>(
    term: &mut DefaultTerminal,
    mut state: SelectorState,
    mut msg_rx: mpsc::Receiver<Message>,
    source: &Arc<S>,
    msg_tx: &mpsc::Sender<Message>,
) -> Result<SelectorExit>
where
    S: PageSource + Sync + 'static,
{
    while !state.is_terminated() {
        // Page results and signals
        while let Ok(msg) = msg_rx.try_recv() {
            state = process_message(state, msg, source, msg_tx);
        }

        if state.is_terminated() {
            break;
        }

        term.draw(|frame| render::view(frame, &state))?;

        if let Some(message) = event::poll()? {
            state = process_message(state, message, source, msg_tx);
        }
    }

    let exit = state.take_exit().unwrap_or(SelectorExit::Quit);
    debug!("Selector finished: {:?}", exit);
    Ok(exit)
}
