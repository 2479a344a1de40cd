//! Key bindings

use crate::input_key::InputKey;
use crate::message::Message;

/// Map a key to a selector message
///
/// Bindings do not depend on state; `update` decides whether the resulting
/// message applies right now.
pub fn handle_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::MoveUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveDown),

        InputKey::PageDown | InputKey::Char('n') => Some(Message::NextPage),
        InputKey::PageUp | InputKey::Char('p') => Some(Message::PrevPage),

        InputKey::Enter => Some(Message::Select),

        _ => None,
    }
}
