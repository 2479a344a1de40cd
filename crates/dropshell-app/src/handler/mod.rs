//! Handler module - TEA update function and key handling
//!
//! - `update`: main `update()` function and message dispatch
//! - `keys`: key to message mapping

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;
use crate::state::{PageRequest, SelectorState};

pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch one page in the background and report back with
    /// `PageLoaded` or `PageFailed`
    FetchPage {
        request: PageRequest,
        page_size: u32,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

/// Initial state plus the fetch of page 1 that gets it out of `Fetching`
pub fn start(page_size: u32) -> (SelectorState, UpdateAction) {
    let state = SelectorState::new(page_size);
    let action = UpdateAction::FetchPage {
        request: PageRequest::initial(),
        page_size: state.page_size,
    };
    (state, action)
}
