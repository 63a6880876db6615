//! Terminal (TUI) mode implementation.

use std::io::{self, Stdout};
use std::path::Path;

use crate::config::Config;
use crate::core::app::{self, AppState};
use crate::core::dispatcher::KeyDispatcher;
use crate::core::geometry::Size;
use crate::core::keymap::KeyMap;
use crate::error::EditorError;
use crate::terminal::color::Palette;
use crate::terminal::display::Display;
use crate::terminal::events::{self, EditorEvent};
use crate::terminal::raw::RawMode;
use crate::terminal::render;

/// Owns the terminal for the length of an editing session
pub struct Tui {
    display: Display,
    dispatcher: KeyDispatcher,
    stdout: Stdout,
    // Dropped last so the terminal is restored after everything else
    _raw_mode: RawMode,
}

impl Tui {
    /// Take over the terminal
    pub fn new(config: &Config) -> Result<Self, EditorError> {
        let keymap = KeyMap::new(
            config
                .keybindings
                .iter()
                .map(|(chord, command)| (chord.as_str(), command.as_str())),
        );
        let (cols, rows) = crossterm::terminal::size()?;
        let raw_mode = RawMode::new()?;

        Ok(Self {
            display: Display::new(
                Size::new(rows as usize, cols as usize),
                Palette::from_config(config),
            ),
            dispatcher: KeyDispatcher::new(keymap),
            stdout: io::stdout(),
            _raw_mode: raw_mode,
        })
    }

    /// Run the blocking read/dispatch/draw loop until a command quits
    pub fn run(&mut self, mut state: AppState) -> Result<(), EditorError> {
        self.redraw(&state)?;
        loop {
            match events::read()? {
                EditorEvent::Key(key) => {
                    let size = self.display.editor_size();
                    match self.dispatcher.handle_key(&state, key, size) {
                        Some(next) => state = next,
                        None => break,
                    }
                }
                EditorEvent::Resize(size) => {
                    tracing::debug!(rows = size.rows, cols = size.cols, "terminal resized");
                    self.display.resize(size);
                }
                EditorEvent::None => continue,
            }
            self.redraw(&state)?;
        }
        Ok(())
    }

    fn redraw(&mut self, state: &AppState) -> Result<(), EditorError> {
        self.display.draw(state);
        render::render_display_to_terminal(&self.display, &mut self.stdout)
    }
}

/// Load `path` and edit it until the user quits. The document is read
/// before the terminal is touched, so a bad path never leaves it in raw
/// mode.
pub fn run_terminal_mode(path: &Path, config: &Config) -> Result<(), EditorError> {
    let state = app::load_document(path)?.with_tab_width(config.tab_width());
    let mut tui = Tui::new(config)?;
    tui.run(state)?;
    tracing::info!("session ended");
    Ok(())
}
