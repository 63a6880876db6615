//! Blocking terminal input, normalized into editor key events

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::geometry::Size;
use crate::core::input::{Key, KeyEvent};
use crate::error::EditorError;

/// Editor events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    Key(KeyEvent),
    Resize(Size),
    /// Input the editor does not react to (mouse, focus, key release)
    None,
}

/// Block until the terminal delivers the next event
pub fn read() -> Result<EditorEvent, EditorError> {
    Ok(translate(event::read()?))
}

pub fn translate(event: Event) -> EditorEvent {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            EditorEvent::Key(translate_key(key_event))
        }
        Event::Resize(cols, rows) => EditorEvent::Resize(Size::new(rows as usize, cols as usize)),
        _ => EditorEvent::None,
    }
}

/// Map a crossterm key to the editor's key model. Keys without a
/// counterpart come back with error status.
pub fn translate_key(key_event: event::KeyEvent) -> KeyEvent {
    let modifiers = key_event.modifiers;
    let alt = modifiers.contains(KeyModifiers::ALT);
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    let key = match key_event.code {
        KeyCode::Char(c) => match (ctrl, alt) {
            // Ctrl-Space and Ctrl-@ both produce NUL on a terminal
            (true, false) if c == ' ' || c == '@' || c == '2' => Key::Ctrl('@'),
            (true, false) => Key::Ctrl(c.to_ascii_lowercase()),
            (false, true) => Key::Alt(c.to_ascii_lowercase()),
            (false, false) => Key::Char(c),
            (true, true) => return KeyEvent::error(),
        },
        KeyCode::Null => Key::Ctrl('@'),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Tab | KeyCode::BackTab => Key::Tab,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::F(n) => Key::F(n),
        KeyCode::Esc => Key::Esc,
        _ => return KeyEvent::error(),
    };

    KeyEvent::new(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyStatus;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        translate_key(event::KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_and_shifted_chars() {
        assert_eq!(key(KeyCode::Char('a'), KeyModifiers::NONE).key, Key::Char('a'));
        assert_eq!(key(KeyCode::Char('A'), KeyModifiers::SHIFT).key, Key::Char('A'));
    }

    #[test]
    fn test_control_and_alt() {
        assert_eq!(key(KeyCode::Char('x'), KeyModifiers::CONTROL).key, Key::Ctrl('x'));
        assert_eq!(key(KeyCode::Char('X'), KeyModifiers::CONTROL).key, Key::Ctrl('x'));
        assert_eq!(key(KeyCode::Char(' '), KeyModifiers::CONTROL).key, Key::Ctrl('@'));
        assert_eq!(key(KeyCode::Null, KeyModifiers::NONE).key, Key::Ctrl('@'));
        assert_eq!(key(KeyCode::Char('w'), KeyModifiers::ALT).key, Key::Alt('w'));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(key(KeyCode::PageDown, KeyModifiers::NONE).key, Key::PageDown);
        assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE).key, Key::Enter);
        assert_eq!(key(KeyCode::F(5), KeyModifiers::NONE).key, Key::F(5));
    }

    #[test]
    fn test_undecodable_keys_are_errors() {
        let e = key(KeyCode::CapsLock, KeyModifiers::NONE);
        assert_eq!(e.status, KeyStatus::Error);
        let e = key(KeyCode::Char('x'), KeyModifiers::CONTROL | KeyModifiers::ALT);
        assert_eq!(e.status, KeyStatus::Error);
    }

    #[test]
    fn test_resize_and_release() {
        assert_eq!(
            translate(Event::Resize(80, 24)),
            EditorEvent::Resize(Size::new(24, 80))
        );
        let mut release = event::KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), EditorEvent::None);
    }
}
