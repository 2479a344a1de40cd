//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` so the selector
//! engine never depends on crossterm.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    PageUp,
    PageDown,

    Enter,
    Esc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_char_distinct_from_char() {
        assert_ne!(InputKey::Char('c'), InputKey::CharCtrl('c'));
    }
}
