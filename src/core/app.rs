//! Application state and the operations the front end drives it with.
//!
//! `AppState` is a value: every operation here borrows the current state and
//! returns a new one. The previous state stays valid, and because the text is
//! a shared rope, producing the next state is cheap.

use std::path::Path;

use crate::core::buffer::FileBuffer;
use crate::core::commands;
use crate::core::geometry::{Coord, Size};
use crate::error::EditorError;

/// Notices kept in the log; only the newest one is ever shown
pub const MAX_MESSAGES: usize = 100;

/// Default tab width in columns
pub const DEFAULT_TAB_WIDTH: usize = 8;

#[derive(Debug, Clone)]
pub struct AppState {
    pub buffer: FileBuffer,
    pub messages: Vec<String>,
    pub clipboard: Option<String>,
    pub tab_width: usize,
}

impl AppState {
    pub fn new(buffer: FileBuffer) -> Self {
        Self {
            buffer,
            messages: Vec::new(),
            clipboard: None,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// State over an in-memory document
    pub fn from_text(file_name: &str, text: &str) -> Self {
        Self::new(FileBuffer::from_text(file_name, text))
    }

    pub fn with_tab_width(self, tab_width: usize) -> Self {
        Self {
            tab_width: tab_width.max(1),
            ..self
        }
    }

    pub fn with_buffer(&self, buffer: FileBuffer) -> Self {
        Self {
            buffer,
            ..self.clone()
        }
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

/// Read the document at `path` into a fresh state
pub fn load_document(path: &Path) -> Result<AppState, EditorError> {
    FileBuffer::load(path).map(AppState::new)
}

/// Append a notice to the message log
pub fn put_message(state: &AppState, text: impl Into<String>) -> AppState {
    let mut messages = state.messages.clone();
    if messages.len() >= MAX_MESSAGES {
        messages.remove(0);
    }
    messages.push(text.into());
    AppState {
        messages,
        ..state.clone()
    }
}

/// Run the named command. `None` asks the editor to quit; an unknown name
/// leaves the document alone and reports it as a notice.
pub fn evaluate_command(state: &AppState, name: &str, size: Size) -> Option<AppState> {
    match commands::find(name) {
        Some(command) => command(state, size).map(|next| scroll_to_cursor(next, size)),
        None => {
            tracing::warn!(command = name, "unknown command");
            Some(put_message(state, format!("unknown command: {}", name)))
        }
    }
}

/// Insert a character at the cursor
pub fn evaluate_insert_character(state: &AppState, c: char, size: Size) -> AppState {
    scroll_to_cursor(state.with_buffer(state.buffer.insert_char(c)), size)
}

/// The active selection in document coordinates, ordered start first
pub fn selected_region(state: &AppState) -> Option<(Coord, Coord)> {
    state.buffer.selected_region()
}

/// Cursor position in (line, expanded column)
pub fn display_cursor(state: &AppState) -> Coord {
    state.buffer.display_cursor(state.tab_width)
}

fn scroll_to_cursor(state: AppState, size: Size) -> AppState {
    let buffer = state.buffer.scroll_to_cursor(size, state.tab_width);
    AppState { buffer, ..state }
}
