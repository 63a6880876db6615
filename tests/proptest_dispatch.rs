//! Property-based tests for chord dispatch.

use std::collections::HashMap;

use ewig::core::dispatcher::{Action, KeyDispatcher};
use ewig::core::input::{Key, KeyEvent};
use ewig::core::keymap::KeyMap;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Keys used to build chords. Plain characters are left out so they stay
/// free for self-insertion.
fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        (b'a'..=b'e').prop_map(|b| Key::Ctrl(b as char)),
        (b'a'..=b'c').prop_map(|b| Key::Alt(b as char)),
        (1u8..=3).prop_map(Key::F),
        Just(Key::PageDown),
        Just(Key::Esc),
    ]
}

fn chords_strategy() -> impl Strategy<Value = Vec<Vec<Key>>> {
    prop::collection::vec(prop::collection::vec(key_strategy(), 1..4), 1..16)
}

/// Bind `cmd-N` to each chord in order (later duplicates win), then drop
/// every chord that is a strict prefix of another so the table is
/// prefix-free.
fn build_table(chords: &[Vec<Key>]) -> HashMap<Vec<Key>, String> {
    let mut table = HashMap::new();
    for (i, chord) in chords.iter().enumerate() {
        table.insert(chord.clone(), format!("cmd-{}", i));
    }
    let keys: Vec<Vec<Key>> = table.keys().cloned().collect();
    table.retain(|chord, _| {
        !keys
            .iter()
            .any(|other| other.len() > chord.len() && other.starts_with(chord))
    });
    table
}

fn dispatcher_for(table: &HashMap<Vec<Key>, String>) -> KeyDispatcher {
    KeyDispatcher::new(KeyMap::from_chords(
        table.iter().map(|(chord, cmd)| (chord.clone(), cmd.clone())),
    ))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn bound_chord_yields_exactly_its_command(chords in chords_strategy()) {
        let table = build_table(&chords);
        let mut dispatcher = dispatcher_for(&table);

        for (chord, command) in &table {
            let (last, prefix) = chord.split_last().unwrap();
            for key in prefix {
                prop_assert_eq!(dispatcher.feed(KeyEvent::new(*key)), None);
            }
            prop_assert_eq!(
                dispatcher.feed(KeyEvent::new(*last)),
                Some(Action::Command(command.clone()))
            );
            prop_assert!(dispatcher.is_idle());
        }
    }

    #[test]
    fn broken_prefix_yields_one_unbound(chords in chords_strategy(), cut in 1usize..3) {
        let table = build_table(&chords);
        let mut dispatcher = dispatcher_for(&table);

        for chord in table.keys().filter(|c| c.len() > 1) {
            let prefix = &chord[..cut.min(chord.len() - 1)];
            for key in prefix {
                prop_assert_eq!(dispatcher.feed(KeyEvent::new(*key)), None);
            }
            // F24 is never part of a generated chord
            let action = dispatcher.feed(KeyEvent::new(Key::F(24)));
            prop_assert!(matches!(action, Some(Action::Unbound(_))));
            prop_assert!(dispatcher.is_idle());
        }
    }

    #[test]
    fn unbound_printable_self_inserts(chords in chords_strategy(), c in "[a-zA-Z0-9 ]") {
        let table = build_table(&chords);
        let mut dispatcher = dispatcher_for(&table);
        let c = c.chars().next().unwrap();

        prop_assert_eq!(
            dispatcher.feed(KeyEvent::new(Key::Char(c))),
            Some(Action::InsertChar(c))
        );
        prop_assert!(dispatcher.is_idle());
    }
}
