//! Terminal takeover for the selector
//!
//! The selector and the remote shell never hold the terminal at the same
//! time: [`enter`] before the event loop, [`leave`] before any session.

use dropshell_core::prelude::*;
use ratatui::DefaultTerminal;

/// Raw mode plus alternate screen, with a panic hook that undoes both
pub fn enter() -> Result<DefaultTerminal> {
    install_panic_hook();
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Give the terminal back in its original state
pub fn leave() -> Result<()> {
    ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()))
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
