// inputs/key.rs

use std::fmt::{self, Display, Formatter};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents a key, with the modifiers the app cares about folded in.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub enum Key {
    Alt(char),
    AltEnter,
    Backspace,
    Char(char),
    Ctrl(char),
    Delete,
    Down,
    End,
    Enter,
    Esc,
    F(u8),
    Home,
    Left,
    PageDown,
    PageUp,
    Right,
    ShiftTab,
    Tab,
    Unknown,
    Up,
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Key::Alt(' ') => write!(f, "<Alt+Space>"),
            Key::Alt(c) => write!(f, "<Alt+{}>", c),
            Key::AltEnter => write!(f, "<Alt+Enter>"),
            Key::Char(' ') => write!(f, "<Space>"),
            Key::Char(c) => write!(f, "<{}>", c),
            Key::Ctrl(' ') => write!(f, "<Ctrl+Space>"),
            Key::Ctrl(c) => write!(f, "<Ctrl+{}>", c),
            Key::F(n) => write!(f, "<F{}>", n),
            Key::ShiftTab => write!(f, "<Shift+Tab>"),
            _ => write!(f, "<{:?}>", self),
        }
    }
}

// convert backend KeyEvent to this crate's Key
impl From<KeyEvent> for Key {
    fn from(key_event: KeyEvent) -> Self {
        let alt = key_event.modifiers.contains(KeyModifiers::ALT);
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Esc => Key::Esc,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Delete => Key::Delete,
            KeyCode::F(n) => Key::F(n),
            KeyCode::Enter if alt => Key::AltEnter,
            KeyCode::Enter => Key::Enter,
            KeyCode::BackTab => Key::ShiftTab,
            KeyCode::Tab => Key::Tab,
            // First check for char + modifier
            KeyCode::Char(c) if alt => Key::Alt(c),
            KeyCode::Char(c) if ctrl => Key::Ctrl(c),
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_event() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Key::from(ctrl_c), Key::Ctrl('c'));
        let alt_enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);
        assert_eq!(Key::from(alt_enter), Key::AltEnter);
        let shift_q = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(Key::from(shift_q), Key::Char('Q'));
        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(Key::from(back_tab), Key::ShiftTab);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::Ctrl('x').to_string(), "<Ctrl+x>");
        assert_eq!(Key::Char(' ').to_string(), "<Space>");
        assert_eq!(Key::Esc.to_string(), "<Esc>");
        assert_eq!(Key::F(5).to_string(), "<F5>");
    }
}
