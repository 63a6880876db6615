//! Key binding trie
//!
//! Maps chords (ordered key sequences such as `C-x C-c`) to command names.
//! Interior nodes without a command are the pending entries: a sequence that
//! ends on one of them needs more keys, while a sequence that falls off the
//! trie is unbound.

use std::collections::HashMap;

use crate::core::input::{Key, KeyEvent, KeyStatus};

/// Outcome of looking up a key sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The sequence is exactly a bound chord
    Matched(String),
    /// The sequence is a strict prefix of at least one bound chord
    Pending,
    /// Nothing is bound to the sequence or any extension of it
    Unbound,
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    command: Option<String>,
    children: HashMap<Key, TrieNode>,
}

/// Immutable key binding table
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    root: TrieNode,
}

impl KeyMap {
    /// Build a key map from `(chord, command)` pairs written in binding
    /// notation. Later entries for an identical chord replace earlier ones.
    pub fn new<'a, I>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = Self::default();
        for (chord, command) in bindings {
            match parse_sequence(chord) {
                Some(keys) => map.insert(&keys, command),
                None => tracing::warn!(chord, command, "ignoring invalid key binding"),
            }
        }
        map
    }

    /// Build a key map from already parsed chords
    pub fn from_chords<I, S>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (Vec<Key>, S)>,
        S: Into<String>,
    {
        let mut map = Self::default();
        for (keys, command) in bindings {
            if !keys.is_empty() {
                map.insert(&keys, command);
            }
        }
        map
    }

    fn insert(&mut self, keys: &[Key], command: impl Into<String>) {
        let node = keys.iter().fold(&mut self.root, |node, key| {
            node.children.entry(*key).or_default()
        });
        node.command = Some(command.into());
    }

    /// Resolve a complete key sequence against the table
    pub fn lookup(&self, sequence: &[KeyEvent]) -> Lookup {
        if sequence.is_empty() {
            return Lookup::Unbound;
        }

        let mut node = &self.root;
        for event in sequence {
            if event.status != KeyStatus::Ok {
                return Lookup::Unbound;
            }
            match node.children.get(&event.key) {
                Some(child) => node = child,
                None => return Lookup::Unbound,
            }
        }

        match &node.command {
            Some(command) => Lookup::Matched(command.clone()),
            None if !node.children.is_empty() => Lookup::Pending,
            None => Lookup::Unbound,
        }
    }
}

/// Named keys accepted in binding notation. Checked before single characters.
const NAMED_KEYS: [&str; 14] = [
    "Backspace", "PageDown", "PageUp", "Delete", "Insert", "Enter", "Right", "Home", "Left",
    "Down", "Tab", "End", "Esc", "Up",
];

/// Parse a chord like `"^X^C"`, `"ESC-w"`, `"^X o"` or `"PageDown"` into
/// its keys. Returns `None` when the chord is empty or malformed.
pub fn parse_sequence(sequence: &str) -> Option<Vec<Key>> {
    let mut keys = Vec::new();

    for token in sequence.split_whitespace() {
        let mut rest = token;
        while !rest.is_empty() {
            let (key, len) = next_key(rest)?;
            keys.push(key);
            rest = &rest[len..];
        }
    }

    if keys.is_empty() { None } else { Some(keys) }
}

/// Read one key from the front of a token, returning it with the number of
/// bytes consumed
fn next_key(token: &str) -> Option<(Key, usize)> {
    for prefix in ["^", "C-", "ESC-", "M-"] {
        if let Some(rest) = token.strip_prefix(prefix) {
            let c = rest.chars().next()?;
            let len = prefix.len() + c.len_utf8();
            return token[..len].parse().ok().map(|key| (key, len));
        }
    }

    let lower = token.to_ascii_lowercase();
    for name in NAMED_KEYS {
        if lower.starts_with(&name.to_ascii_lowercase()) {
            return name.parse().ok().map(|key| (key, name.len()));
        }
    }

    let c = token.chars().next()?;
    Some((Key::Char(c), c.len_utf8()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(keys: &[Key]) -> Vec<KeyEvent> {
        keys.iter().copied().map(KeyEvent::new).collect()
    }

    #[test]
    fn test_parse_sequence_valid() {
        assert_eq!(parse_sequence("^X"), Some(vec![Key::Ctrl('x')]));
        assert_eq!(
            parse_sequence("^X^C"),
            Some(vec![Key::Ctrl('x'), Key::Ctrl('c')])
        );
        assert_eq!(parse_sequence("ESC-w"), Some(vec![Key::Alt('w')]));
        assert_eq!(
            parse_sequence("^X o"),
            Some(vec![Key::Ctrl('x'), Key::Char('o')])
        );
        assert_eq!(parse_sequence("PageDown"), Some(vec![Key::PageDown]));
        assert_eq!(parse_sequence("^@"), Some(vec![Key::Ctrl('@')]));
    }

    #[test]
    fn test_parse_sequence_edge_cases() {
        assert_eq!(parse_sequence(""), None);
        assert_eq!(parse_sequence("   "), None);
        assert_eq!(parse_sequence("^"), None);
        assert_eq!(parse_sequence("ESC-"), None);
    }

    #[test]
    fn test_single_key_binding() {
        let map = KeyMap::new([("^F", "forward-char")]);
        assert_eq!(
            map.lookup(&events(&[Key::Ctrl('f')])),
            Lookup::Matched("forward-char".to_string())
        );
    }

    #[test]
    fn test_multi_key_sequence() {
        let map = KeyMap::new([("^X^F", "find-file"), ("^X^C", "quit")]);
        assert_eq!(map.lookup(&events(&[Key::Ctrl('x')])), Lookup::Pending);
        assert_eq!(
            map.lookup(&events(&[Key::Ctrl('x'), Key::Ctrl('c')])),
            Lookup::Matched("quit".to_string())
        );
        assert_eq!(
            map.lookup(&events(&[Key::Ctrl('x'), Key::Ctrl('z')])),
            Lookup::Unbound
        );
    }

    #[test]
    fn test_unbound_and_empty() {
        let map = KeyMap::new([("^X^C", "quit")]);
        assert_eq!(map.lookup(&[]), Lookup::Unbound);
        assert_eq!(map.lookup(&events(&[Key::Char('q')])), Lookup::Unbound);
        assert_eq!(
            map.lookup(&events(&[Key::Ctrl('x'), Key::Ctrl('c'), Key::Ctrl('c')])),
            Lookup::Unbound
        );
    }

    #[test]
    fn test_last_binding_wins() {
        let map = KeyMap::new([("^K", "kill-line"), ("^K", "cut")]);
        assert_eq!(
            map.lookup(&events(&[Key::Ctrl('k')])),
            Lookup::Matched("cut".to_string())
        );
    }

    #[test]
    fn test_error_status_never_matches() {
        let map = KeyMap::new([("^@", "start-selection")]);
        assert_eq!(map.lookup(&[KeyEvent::error()]), Lookup::Unbound);
    }

    #[test]
    fn test_invalid_binding_is_skipped() {
        let map = KeyMap::new([("", "nothing"), ("^A", "move-beginning-of-line")]);
        assert_eq!(
            map.lookup(&events(&[Key::Ctrl('a')])),
            Lookup::Matched("move-beginning-of-line".to_string())
        );
    }
}
