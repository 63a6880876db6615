//! The off-screen cell grid and the code that draws editor state into it.
//!
//! `Display::draw` is pure with respect to the terminal: it only fills the
//! grid and records where the cursor belongs. `render` turns the grid into
//! escape sequences.

use crate::core::app::{self, AppState};
use crate::core::geometry::{Coord, Size, Viewport};
use crate::terminal::color::{Color, Palette};
use crate::terminal::renderers::{line, selection};
use crate::terminal::viewport::{self, CursorPlacement};

/// A single cell on the terminal screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub reverse: bool,
}

impl Cell {
    pub fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self {
            ch,
            fg,
            bg,
            reverse: false,
        }
    }

    pub fn reversed(ch: char) -> Self {
        Self {
            reverse: true,
            ..Self::new(ch, Color::Reset, Color::Reset)
        }
    }

    pub fn empty() -> Self {
        Self::new(' ', Color::Reset, Color::Reset)
    }

    fn with_char(self, ch: char) -> Self {
        Self { ch, ..self }
    }
}

/// Row-major grid of cells
#[derive(Clone, Debug)]
pub struct ScreenBuffer {
    pub cells: Vec<Cell>,
    pub width: usize,
    pub height: usize,
}

impl ScreenBuffer {
    pub fn new(size: Size) -> Self {
        Self {
            cells: vec![Cell::empty(); size.rows * size.cols],
            width: size.cols,
            height: size.rows,
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::empty());
    }

    /// Write a cell; writes outside the grid are dropped
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Characters of row `y` with trailing blanks removed
    pub fn row_text(&self, y: usize) -> String {
        if y >= self.height {
            return String::new();
        }
        let row = &self.cells[y * self.width..(y + 1) * self.width];
        let text: String = row.iter().map(|cell| cell.ch).collect();
        text.trim_end().to_string()
    }

    /// Write `text` from column `x`, returning the column after the last
    /// cell written
    fn put_str(&mut self, mut x: usize, y: usize, text: &str, style: Cell) -> usize {
        for ch in text.chars() {
            if x >= self.width {
                break;
            }
            self.set(x, y, style.with_char(ch));
            x += 1;
        }
        x
    }

    fn fill_to_edge(&mut self, x: usize, y: usize, style: Cell) {
        for col in x..self.width {
            self.set(col, y, style.with_char(' '));
        }
    }
}

/// Terminal-sized frame of the editor
pub struct Display {
    /// Terminal dimensions
    pub terminal_size: Size,
    pub buffer: ScreenBuffer,
    /// Cursor position after the last draw
    pub cursor: CursorPlacement,
    pub palette: Palette,
}

impl Display {
    pub fn new(terminal_size: Size, palette: Palette) -> Self {
        Self {
            terminal_size,
            buffer: ScreenBuffer::new(terminal_size),
            cursor: CursorPlacement {
                pos: Coord::default(),
                visible: false,
            },
            palette,
        }
    }

    /// Adopt a new terminal size. Zero-sized updates are ignored.
    pub fn resize(&mut self, terminal_size: Size) {
        if terminal_size.rows == 0 || terminal_size.cols == 0 {
            return;
        }
        self.terminal_size = terminal_size;
        self.buffer = ScreenBuffer::new(terminal_size);
    }

    /// Size of the text area
    pub fn editor_size(&self) -> Size {
        viewport::editor_size(self.terminal_size)
    }

    /// Redraw the whole frame from `state`
    pub fn draw(&mut self, state: &AppState) {
        let size = self.editor_size();
        let view = Viewport::new(state.buffer.scroll, size);
        self.buffer.clear();

        self.draw_text(state, &view);
        if self.terminal_size.rows > size.rows {
            self.draw_mode_line(state, size.rows);
        }
        if let Some(message) = state.last_message() {
            if self.terminal_size.rows > size.rows + 1 {
                self.draw_message(message, size.rows + 1);
            }
        }
        self.cursor = viewport::place_cursor(&view, app::display_cursor(state));
    }

    fn draw_text(&mut self, state: &AppState, view: &Viewport) {
        let buf = &state.buffer;
        let tab_width = state.tab_width;
        let expanded = |pos: Coord| Coord::new(pos.row, buf.expanded_col(pos, tab_width));
        let region = app::selected_region(state).map(|(start, end)| {
            selection::ScreenSelection::from_document(expanded(start), expanded(end), view.scroll)
        });

        let normal = Cell::empty();
        let highlighted = Cell::new(' ', self.palette.selection_fg, self.palette.selection_bg);

        for (y, row) in viewport::visible_lines(view, buf.line_count()).enumerate() {
            let rendered =
                line::render_chars(buf.line(row).chars(), view.scroll.col, view.size.cols, tab_width);
            let highlight = selection::classify(y, region.as_ref());

            let mut x = 0;
            for span in selection::compose(&rendered, highlight) {
                let style = if span.highlighted { highlighted } else { normal };
                x = self.buffer.put_str(x, y, &span.text, style);
                if span.fill_to_edge {
                    self.buffer.fill_to_edge(x, y, style);
                    x = self.buffer.width;
                }
            }
        }
    }

    fn draw_mode_line(&mut self, state: &AppState, y: usize) {
        let buf = &state.buffer;
        let cursor = buf.actual_cursor();
        let mark = if buf.is_modified() { "**" } else { "--" };
        let text = format!(" {} {}  ({}, {})", mark, buf.file_name, cursor.col, cursor.row);

        let style = Cell::reversed(' ');
        let x = self.buffer.put_str(0, y, &text, style);
        self.buffer.fill_to_edge(x, y, style);
    }

    fn draw_message(&mut self, message: &str, y: usize) {
        let style = Cell::new(' ', self.palette.message_fg, Color::Reset);
        self.buffer
            .put_str(0, y, &format!("message: {}", message), style);
    }
}
