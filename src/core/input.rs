use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Native key representation for ewig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Alt(char),
    F(u8),
    Esc,
    Enter,
    Backspace,
    Tab,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    Insert,
    Null,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Ctrl(c) => write!(f, "C-{}", c),
            Key::Alt(c) => write!(f, "M-{}", c),
            Key::F(n) => write!(f, "F{}", n),
            Key::Esc => write!(f, "ESC"),
            Key::Enter => write!(f, "RET"),
            Key::Backspace => write!(f, "BS"),
            Key::Tab => write!(f, "TAB"),
            Key::Delete => write!(f, "DEL"),
            Key::Home => write!(f, "Home"),
            Key::End => write!(f, "End"),
            Key::PageUp => write!(f, "PgUp"),
            Key::PageDown => write!(f, "PgDn"),
            Key::Up => write!(f, "Up"),
            Key::Down => write!(f, "Down"),
            Key::Left => write!(f, "Left"),
            Key::Right => write!(f, "Right"),
            Key::Insert => write!(f, "Ins"),
            Key::Null => write!(f, "NUL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key: {0}")]
pub struct ParseKeyError(pub String);

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        // ^X and C-x
        if let Some(rest) = s.strip_prefix('^').or_else(|| s.strip_prefix("C-")) {
            let mut rest_chars = rest.chars();
            if let (Some(c), None) = (rest_chars.next(), rest_chars.next()) {
                return Ok(Key::Ctrl(c.to_ascii_lowercase()));
            }
        }

        // M-x and ESC-x
        if let Some(rest) = s.strip_prefix("M-").or_else(|| s.strip_prefix("ESC-")) {
            let mut rest_chars = rest.chars();
            if let (Some(c), None) = (rest_chars.next(), rest_chars.next()) {
                return Ok(Key::Alt(c.to_ascii_lowercase()));
            }
        }

        match s.to_ascii_uppercase().as_str() {
            "ENTER" | "RET" => Ok(Key::Enter),
            "TAB" => Ok(Key::Tab),
            "BACKSPACE" | "BS" => Ok(Key::Backspace),
            "ESC" => Ok(Key::Esc),
            "DELETE" | "DEL" => Ok(Key::Delete),
            "HOME" => Ok(Key::Home),
            "END" => Ok(Key::End),
            "PAGEUP" | "PGUP" => Ok(Key::PageUp),
            "PAGEDOWN" | "PGDN" => Ok(Key::PageDown),
            "UP" => Ok(Key::Up),
            "DOWN" => Ok(Key::Down),
            "LEFT" => Ok(Key::Left),
            "RIGHT" => Ok(Key::Right),
            "INSERT" | "INS" => Ok(Key::Insert),
            "NUL" | "NULL" => Ok(Key::Null),
            _ => {
                if let Some(n) = s.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
                    if (1..=24).contains(&n) {
                        return Ok(Key::F(n));
                    }
                }

                // Raw characters keep their case
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Key::Char(c)),
                    _ => Err(ParseKeyError(s.to_string())),
                }
            }
        }
    }
}

/// Whether the terminal delivered a key it could decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyStatus {
    Ok,
    Error,
}

/// One raw input unit as read from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub status: KeyStatus,
    pub key: Key,
}

impl KeyEvent {
    pub const fn new(key: Key) -> Self {
        Self {
            status: KeyStatus::Ok,
            key,
        }
    }

    /// An input the driver failed to decode
    pub const fn error() -> Self {
        Self {
            status: KeyStatus::Error,
            key: Key::Null,
        }
    }

    /// The character to self-insert, if this event is a plain printable key
    pub fn printable(&self) -> Option<char> {
        match (self.status, self.key) {
            (KeyStatus::Ok, Key::Char(c)) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// Human readable name of a key, as shown in notices
pub fn key_name(event: &KeyEvent) -> String {
    match event.status {
        KeyStatus::Ok => event.key.to_string(),
        KeyStatus::Error => "<invalid>".to_string(),
    }
}

/// Describe a sequence of keys the way they are typed, e.g. `C-x C-z`
pub fn describe_sequence(keys: &[KeyEvent]) -> String {
    keys.iter().map(key_name).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_str_ctrl() {
        assert_eq!("^X".parse::<Key>(), Ok(Key::Ctrl('x')));
        assert_eq!("C-c".parse::<Key>(), Ok(Key::Ctrl('c')));
        assert_eq!("^@".parse::<Key>(), Ok(Key::Ctrl('@')));
    }

    #[test]
    fn test_key_from_str_meta() {
        assert_eq!("ESC-w".parse::<Key>(), Ok(Key::Alt('w')));
        assert_eq!("M-W".parse::<Key>(), Ok(Key::Alt('w')));
    }

    #[test]
    fn test_key_from_str_named_and_raw() {
        assert_eq!("PageDown".parse::<Key>(), Ok(Key::PageDown));
        assert_eq!("backspace".parse::<Key>(), Ok(Key::Backspace));
        assert_eq!("F12".parse::<Key>(), Ok(Key::F(12)));
        assert_eq!("A".parse::<Key>(), Ok(Key::Char('A')));
        assert_eq!("é".parse::<Key>(), Ok(Key::Char('é')));
        assert!("Bogus".parse::<Key>().is_err());
        assert!("F99".parse::<Key>().is_err());
    }

    #[test]
    fn test_printable() {
        assert_eq!(KeyEvent::new(Key::Char('a')).printable(), Some('a'));
        assert_eq!(KeyEvent::new(Key::Char('\u{7}')).printable(), None);
        assert_eq!(KeyEvent::new(Key::Ctrl('a')).printable(), None);
        assert_eq!(KeyEvent::new(Key::Up).printable(), None);
        assert_eq!(KeyEvent::error().printable(), None);
    }

    #[test]
    fn test_describe_sequence() {
        let keys = [KeyEvent::new(Key::Ctrl('x')), KeyEvent::new(Key::Char('z'))];
        assert_eq!(describe_sequence(&keys), "C-x z");
        assert_eq!(key_name(&KeyEvent::error()), "<invalid>");
    }
}
