//! Application execution modes

mod tui;

pub use tui::{Tui, run_terminal_mode};
