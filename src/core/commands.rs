//! The command table.
//!
//! Each command maps the current state to the next one. Returning `None`
//! ends the session.

use crate::core::app::{AppState, put_message};
use crate::core::geometry::Size;

pub type CommandFn = fn(&AppState, Size) -> Option<AppState>;

const COMMANDS: &[(&str, CommandFn)] = &[
    ("move-up", move_up),
    ("move-down", move_down),
    ("move-left", move_left),
    ("move-right", move_right),
    ("page-up", page_up),
    ("page-down", page_down),
    ("move-beginning-of-line", move_line_start),
    ("move-end-of-line", move_line_end),
    ("delete-char", delete_char),
    ("delete-char-right", delete_char_right),
    ("insert-tab", insert_tab),
    ("new-line", new_line),
    ("kill-line", kill_line),
    ("start-selection", start_selection),
    ("copy", copy),
    ("cut", cut),
    ("paste", paste),
    ("quit", quit),
];

/// Look up a command by name
pub fn find(name: &str) -> Option<CommandFn> {
    COMMANDS
        .iter()
        .find(|(command, _)| *command == name)
        .map(|(_, f)| *f)
}

/// Names of every command, in table order
#[cfg(test)]
pub fn names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|(name, _)| *name)
}

fn move_up(state: &AppState, _: Size) -> Option<AppState> {
    Some(state.with_buffer(state.buffer.move_up()))
}

fn move_down(state: &AppState, _: Size) -> Option<AppState> {
    Some(state.with_buffer(state.buffer.move_down()))
}

fn move_left(state: &AppState, _: Size) -> Option<AppState> {
    Some(state.with_buffer(state.buffer.move_left()))
}

fn move_right(state: &AppState, _: Size) -> Option<AppState> {
    Some(state.with_buffer(state.buffer.move_right()))
}

fn page_up(state: &AppState, size: Size) -> Option<AppState> {
    Some(state.with_buffer(state.buffer.page_up(size)))
}

fn page_down(state: &AppState, size: Size) -> Option<AppState> {
    Some(state.with_buffer(state.buffer.page_down(size)))
}

fn move_line_start(state: &AppState, _: Size) -> Option<AppState> {
    Some(state.with_buffer(state.buffer.move_line_start()))
}

fn move_line_end(state: &AppState, _: Size) -> Option<AppState> {
    Some(state.with_buffer(state.buffer.move_line_end()))
}

fn delete_char(state: &AppState, _: Size) -> Option<AppState> {
    Some(state.with_buffer(state.buffer.delete_backward()))
}

fn delete_char_right(state: &AppState, _: Size) -> Option<AppState> {
    Some(state.with_buffer(state.buffer.delete_forward()))
}

fn insert_tab(state: &AppState, _: Size) -> Option<AppState> {
    Some(state.with_buffer(state.buffer.insert_char('\t')))
}

fn new_line(state: &AppState, _: Size) -> Option<AppState> {
    Some(state.with_buffer(state.buffer.insert_char('\n')))
}

fn start_selection(state: &AppState, _: Size) -> Option<AppState> {
    Some(state.with_buffer(state.buffer.start_selection()))
}

fn quit(_: &AppState, _: Size) -> Option<AppState> {
    None
}

fn kill_line(state: &AppState, _: Size) -> Option<AppState> {
    match state.buffer.kill_line() {
        Some((buffer, killed)) => Some(AppState {
            buffer,
            clipboard: Some(killed),
            ..state.clone()
        }),
        None => Some(put_message(state, "end of buffer")),
    }
}

fn copy(state: &AppState, _: Size) -> Option<AppState> {
    match state.buffer.selected_text() {
        Some(text) => Some(AppState {
            buffer: state.buffer.clear_selection(),
            clipboard: Some(text),
            ..state.clone()
        }),
        None => Some(put_message(state, "no selection")),
    }
}

fn cut(state: &AppState, _: Size) -> Option<AppState> {
    match state.buffer.cut() {
        Some((buffer, text)) => Some(AppState {
            buffer,
            clipboard: Some(text),
            ..state.clone()
        }),
        None => Some(put_message(state, "no selection")),
    }
}

fn paste(state: &AppState, _: Size) -> Option<AppState> {
    match &state.clipboard {
        Some(text) => Some(state.with_buffer(state.buffer.insert_text(text))),
        None => Some(put_message(state, "clipboard is empty")),
    }
}
