//! Message processing: run `update` to a fixed point and dispatch actions

use std::sync::Arc;

use dropshell_api::PageSource;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::SelectorState;

/// Process a message through the TEA update function
///
/// Follow-up messages are handled immediately; actions are spawned.
pub fn process_message<S>(
    state: SelectorState,
    message: Message,
    source: &Arc<S>,
    msg_tx: &mpsc::Sender<Message>,
) -> SelectorState
where
    S: PageSource + Sync + 'static,
{
    let mut state = state;
    let mut msg = Some(message);

    while let Some(m) = msg {
        let (next, result) = handler::update(state, m);
        state = next;

        if let Some(action) = result.action {
            handle_action(action, source.clone(), msg_tx.clone());
        }

        msg = result.message;
    }

    state
}
