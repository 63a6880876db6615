use crate::core::app::{self, AppState};
use crate::core::geometry::Size;
use crate::core::input::{KeyEvent, describe_sequence, key_name};
use crate::core::keymap::{KeyMap, Lookup};

/// What a resolved key sequence asks the editor to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run a named command
    Command(String),
    /// Self-insert a printable character
    InsertChar(char),
    /// Nothing is bound to the sequence; carries its description
    Unbound(String),
}

/// Accumulates keystrokes until they resolve against the key map.
///
/// The dispatcher is either idle (no pending keys) or accumulating a chord.
/// Every resolution, whether a match, a miss, or a self-insert, clears the
/// pending sequence.
#[derive(Debug, Clone)]
pub struct KeyDispatcher {
    keymap: KeyMap,
    pending: Vec<KeyEvent>,
}

impl KeyDispatcher {
    pub fn new(keymap: KeyMap) -> Self {
        Self {
            keymap,
            pending: Vec::new(),
        }
    }

    /// Keys typed so far for an incomplete chord
    pub fn pending(&self) -> &[KeyEvent] {
        &self.pending
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Feed one key. Returns `None` while a chord is still incomplete.
    pub fn feed(&mut self, event: KeyEvent) -> Option<Action> {
        self.pending.push(event);

        match self.keymap.lookup(&self.pending) {
            Lookup::Matched(command) => {
                tracing::debug!(
                    keys = %describe_sequence(&self.pending),
                    command = command.as_str(),
                    "key sequence matched"
                );
                self.pending.clear();
                Some(Action::Command(command))
            }
            Lookup::Pending => None,
            Lookup::Unbound => {
                let single = self.pending.len() == 1;
                let description = describe_sequence(&self.pending);
                self.pending.clear();

                match event.printable() {
                    Some(c) if single => Some(Action::InsertChar(c)),
                    _ => {
                        tracing::debug!(keys = %description, "unbound key sequence");
                        Some(Action::Unbound(description))
                    }
                }
            }
        }
    }

    /// Feed one key and apply the resulting action to `state`.
    ///
    /// Returns the next state, or `None` once a command asks to quit. An
    /// incomplete chord leaves the state untouched.
    pub fn handle_key(&mut self, state: &AppState, event: KeyEvent, size: Size) -> Option<AppState> {
        match self.feed(event) {
            None => Some(state.clone()),
            Some(Action::Command(command)) => app::evaluate_command(state, &command, size),
            Some(Action::InsertChar(c)) => {
                let state = app::put_message(state, format!("adding character: {}", key_name(&event)));
                Some(app::evaluate_insert_character(&state, c, size))
            }
            Some(Action::Unbound(_)) => Some(app::put_message(state, "unbound key sequence")),
        }
    }
}
