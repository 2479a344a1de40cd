//! Selector state

use dropshell_core::{Error, InstanceSummary};

/// Lifecycle of one selector run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first page; nothing to show yet
    Fetching,
    /// A page is on screen
    Ready,
    /// The loop should stop; see [`SelectorState::exit`]
    Terminated,
}

/// Which row the cursor lands on when a requested page arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Top,
    Bottom,
}

/// An outstanding page fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index
    pub page: u32,
    pub landing: Landing,
}

impl PageRequest {
    pub fn new(page: u32, landing: Landing) -> Self {
        Self { page, landing }
    }

    pub fn initial() -> Self {
        Self::new(1, Landing::Top)
    }
}

/// Why the selector stopped
#[derive(Debug)]
pub enum SelectorExit {
    Selected(InstanceSummary),
    Quit,
    Failed(Error),
}

/// Complete selector state
///
/// Holds only the page currently on screen. While a boundary fetch is
/// outstanding (`pending` set, phase `Ready`) the old page stays visible and
/// navigation is ignored until the new page replaces it.
#[derive(Debug)]
pub struct SelectorState {
    pub items: Vec<InstanceSummary>,
    /// Row under the cursor; `< items.len()` whenever items is non-empty
    pub cursor: usize,
    /// 1-based index of the page in `items`
    pub page: u32,
    pub last_page: bool,
    pub phase: Phase,
    pub pending: Option<PageRequest>,
    /// Cursor at the moment of selection
    pub selected: Option<usize>,
    pub page_size: u32,
    pub exit: Option<SelectorExit>,
}

impl SelectorState {
    /// Fresh state waiting on page 1
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            page: 1,
            last_page: false,
            phase: Phase::Fetching,
            pending: Some(PageRequest::initial()),
            selected: None,
            page_size: page_size.max(1),
            exit: None,
        }
    }

    /// True only while the initial page is outstanding
    pub fn fetching(&self) -> bool {
        self.phase == Phase::Fetching
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    /// Ready with no fetch in flight
    pub fn accepts_navigation(&self) -> bool {
        self.is_ready() && self.pending.is_none()
    }

    /// Item under the cursor, if any
    pub fn current(&self) -> Option<&InstanceSummary> {
        self.items.get(self.cursor)
    }

    pub fn at_top_row(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_bottom_row(&self) -> bool {
        self.cursor + 1 >= self.items.len()
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        !self.last_page
    }

    /// Take the exit reason, leaving `None` behind
    pub fn take_exit(&mut self) -> Option<SelectorExit> {
        self.exit.take()
    }
}
