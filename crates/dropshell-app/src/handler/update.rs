//! Main update function - handles state transitions (TEA pattern)

use dropshell_core::prelude::*;
use dropshell_core::Page;

use super::{keys::handle_key, UpdateAction, UpdateResult};
use crate::message::Message;
use crate::state::{Landing, PageRequest, Phase, SelectorExit, SelectorState};

/// Process a message and produce the next state
///
/// The previous state is consumed; the caller keeps only what comes back.
pub fn update(mut state: SelectorState, message: Message) -> (SelectorState, UpdateResult) {
    // Quit is honored in every phase, even mid-fetch
    if let Message::Quit = message {
        if !state.is_terminated() {
            info!("Selector quit on page {}", state.page);
            state.phase = Phase::Terminated;
            state.pending = None;
            state.exit = Some(SelectorExit::Quit);
        }
        return (state, UpdateResult::none());
    }

    if state.is_terminated() {
        return (state, UpdateResult::none());
    }

    let result = match message {
        Message::Key(key) => match handle_key(key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick | Message::Quit => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Fetch results
        // ─────────────────────────────────────────────────────────
        Message::PageLoaded { request, page } => {
            if state.pending == Some(request) {
                apply_page(&mut state, request, page);
            } else {
                debug!("Ignoring unrequested page {}", request.page);
            }
            UpdateResult::none()
        }

        Message::PageFailed { request, error } => {
            if state.pending == Some(request) {
                error!("Fetching page {} failed: {}", request.page, error);
                state.phase = Phase::Terminated;
                state.pending = None;
                state.exit = Some(SelectorExit::Failed(error));
            } else {
                debug!("Ignoring failure of unrequested page {}", request.page);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation (ignored while a fetch is outstanding)
        // ─────────────────────────────────────────────────────────
        _ if !state.accepts_navigation() => UpdateResult::none(),

        Message::MoveUp => move_up(&mut state),
        Message::MoveDown => move_down(&mut state),
        Message::NextPage => {
            if state.has_next_page() {
                let next = state.page + 1;
                request_page(&mut state, next, Landing::Top)
            } else {
                UpdateResult::none()
            }
        }
        Message::PrevPage => {
            if state.has_previous_page() {
                let previous = state.page - 1;
                request_page(&mut state, previous, Landing::Top)
            } else {
                UpdateResult::none()
            }
        }
        Message::Select => select(&mut state),
    };

    (state, result)
}

fn apply_page(state: &mut SelectorState, request: PageRequest, page: Page) {
    debug!(
        "Page {} arrived with {} items (last_page={})",
        request.page,
        page.len(),
        page.last_page
    );

    state.cursor = match request.landing {
        Landing::Top => 0,
        Landing::Bottom => page.len().saturating_sub(1),
    };
    state.items = page.items;
    state.last_page = page.last_page;
    state.page = request.page;
    state.pending = None;
    state.phase = Phase::Ready;
}

// An empty page has no row to move to, but its page boundaries still work
fn move_up(state: &mut SelectorState) -> UpdateResult {
    if !state.items.is_empty() && state.cursor > 0 {
        state.cursor -= 1;
        UpdateResult::none()
    } else if state.has_previous_page() {
        let previous = state.page - 1;
        request_page(state, previous, Landing::Bottom)
    } else {
        UpdateResult::none()
    }
}

fn move_down(state: &mut SelectorState) -> UpdateResult {
    if !state.at_bottom_row() {
        state.cursor += 1;
        UpdateResult::none()
    } else if state.has_next_page() {
        let next = state.page + 1;
        request_page(state, next, Landing::Top)
    } else {
        UpdateResult::none()
    }
}

fn request_page(state: &mut SelectorState, page: u32, landing: Landing) -> UpdateResult {
    let request = PageRequest::new(page, landing);
    debug!("Requesting page {page} (landing {landing:?})");
    state.pending = Some(request);
    UpdateResult::action(UpdateAction::FetchPage {
        request,
        page_size: state.page_size,
    })
}

fn select(state: &mut SelectorState) -> UpdateResult {
    let Some(item) = state.current().cloned() else {
        return UpdateResult::none();
    };

    info!("Selected {} ({}) on page {}", item.name, item.id, state.page);
    state.selected = Some(state.cursor);
    state.phase = Phase::Terminated;
    state.exit = Some(SelectorExit::Selected(item));
    UpdateResult::none()
}
