//! Message types for the selector (TEA pattern)

use dropshell_core::{Error, Page};

use crate::input_key::InputKey;
use crate::state::PageRequest;

/// All possible messages/events in the selector
#[derive(Debug)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    MoveUp,
    MoveDown,
    /// Jump to the first row of the next page
    NextPage,
    /// Jump to the first row of the previous page
    PrevPage,

    /// Choose the row under the cursor
    Select,

    /// Leave without choosing
    Quit,

    /// Input poll timed out
    Tick,

    // ─────────────────────────────────────────────────────────
    // Fetch results
    // ─────────────────────────────────────────────────────────
    PageLoaded { request: PageRequest, page: Page },
    PageFailed { request: PageRequest, error: Error },
}
