//! dropshell-tui - Terminal UI for the droplet selector
//!
//! Wraps the selector engine from dropshell-app with ratatui rendering and
//! crossterm event polling. The terminal is fully restored before
//! [`run_selector`] returns so a remote shell can take it over.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;

#[cfg(test)]
pub mod test_utils;

pub use render::{render, view};
pub use runner::run_selector;
