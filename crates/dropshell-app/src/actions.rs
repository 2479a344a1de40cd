//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use dropshell_api::PageSource;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
///
/// Results come back as messages; nothing here touches selector state.
pub fn handle_action<S>(action: UpdateAction, source: Arc<S>, msg_tx: mpsc::Sender<Message>)
where
    S: PageSource + Sync + 'static,
{
    match action {
        UpdateAction::FetchPage { request, page_size } => {
            tokio::spawn(async move {
                let msg = match source.fetch_page(request.page, page_size).await {
                    Ok(page) => Message::PageLoaded { request, page },
                    Err(error) => {
                        warn!("Page {} fetch failed: {}", request.page, error);
                        Message::PageFailed { request, error }
                    }
                };

                if msg_tx.send(msg).await.is_err() {
                    debug!("Selector gone before page {} arrived", request.page);
                }
            });
        }
    }
}
