//! # dropshell-app - Selector Engine
//!
//! The interactive droplet selector as a TEA (The Elm Architecture) state
//! machine: [`SelectorState`] holds the visible page, [`handler::update`]
//! turns one [`Message`] into the next state plus an optional
//! [`UpdateAction`], and [`actions::handle_action`] runs page fetches as
//! background tasks that report back through the message channel.
//!
//! This crate has no terminal dependency. Keys arrive as [`InputKey`]s
//! converted at the TUI boundary.
//!
//! ## Public API
//!
//! - [`SelectorState`], [`Phase`], [`PageRequest`], [`Landing`], [`SelectorExit`]
//! - [`Message`], [`InputKey`]
//! - [`handler::update()`], [`handler::start()`], [`UpdateAction`], [`UpdateResult`]
//! - [`process::process_message()`] - update loop plus action dispatch
//! - [`signals::spawn_signal_handler()`] - SIGINT/SIGTERM to [`Message::Quit`]
//! - [`config`] - `config.toml` loading

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{Landing, PageRequest, Phase, SelectorExit, SelectorState};
