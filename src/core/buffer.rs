//! FileBuffer: an immutable, line-addressed document value.
//!
//! Text lives in a `ropey::Rope` behind an `Arc`. Every edit produces a new
//! `FileBuffer` that shares all untouched rope nodes with its predecessor,
//! so keeping older states around (or comparing against the loaded content)
//! costs next to nothing.

use std::fs;
use std::io::{BufReader, ErrorKind};
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use ropey::{Rope, RopeSlice};

use crate::core::columns;
use crate::core::geometry::{Coord, Size};
use crate::error::EditorError;

#[derive(Debug, Clone)]
pub struct FileBuffer {
    /// Name shown in the mode line
    pub file_name: String,
    /// Current text
    pub content: Arc<Rope>,
    /// Text as it was loaded; the dirty mark compares against this
    pub file_content: Arc<Rope>,
    /// Cursor in (line, character index). The column may run past the end of
    /// the line to remember the goal column during vertical movement; use
    /// [`FileBuffer::actual_cursor`] for editing.
    pub cursor: Coord,
    /// Top-left visible position in (line, expanded column)
    pub scroll: Coord,
    /// Where the active selection was started, if any
    pub selection_start: Option<Coord>,
}

impl FileBuffer {
    pub fn from_rope(file_name: impl Into<String>, rope: Rope) -> Self {
        let content = Arc::new(rope);
        Self {
            file_name: file_name.into(),
            file_content: Arc::clone(&content),
            content,
            cursor: Coord::default(),
            scroll: Coord::default(),
            selection_start: None,
        }
    }

    pub fn from_text(file_name: impl Into<String>, text: &str) -> Self {
        Self::from_rope(file_name, Rope::from_str(text))
    }

    /// Load a document from disk. Invalid UTF-8 is replaced rather than
    /// rejected; anything else that stops the read is fatal.
    pub fn load(path: &Path) -> Result<Self, EditorError> {
        let load_error = |source| EditorError::Load {
            path: path.to_path_buf(),
            source,
        };

        let file = fs::File::open(path).map_err(load_error)?;
        let rope = match Rope::from_reader(BufReader::new(file)) {
            Ok(rope) => rope,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                let bytes = fs::read(path).map_err(load_error)?;
                tracing::warn!(path = %path.display(), "file is not valid UTF-8, decoding lossily");
                Rope::from_str(&String::from_utf8_lossy(&bytes))
            }
            Err(e) => return Err(load_error(e)),
        };

        let name = path.display().to_string();
        tracing::info!(path = %name, lines = rope.len_lines(), "document loaded");
        Ok(Self::from_rope(name, rope))
    }

    // =========================================================================
    // LINES
    // =========================================================================

    /// Number of lines; never zero
    pub fn line_count(&self) -> usize {
        self.content.len_lines()
    }

    /// Line `row` without its terminator. Out-of-range rows are empty.
    pub fn line(&self, row: usize) -> RopeSlice<'_> {
        if row >= self.line_count() {
            return self.content.slice(0..0);
        }
        let line = self.content.line(row);
        line.slice(..text_len(line))
    }

    pub fn line_text(&self, row: usize) -> String {
        self.line(row).to_string()
    }

    /// Number of characters on a line, terminator excluded
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).len_chars()
    }

    /// Whether the text differs from what was loaded. Shared content is
    /// recognised by identity and differing lengths settle it at once;
    /// otherwise the ropes are compared chunk by chunk, so edits that cancel
    /// out read as clean. That last case costs time linear in the file size.
    pub fn is_modified(&self) -> bool {
        if Arc::ptr_eq(&self.content, &self.file_content) {
            return false;
        }
        if self.content.len_bytes() != self.file_content.len_bytes() {
            return true;
        }
        *self.content != *self.file_content
    }

    // =========================================================================
    // POSITIONS
    // =========================================================================

    /// Cursor with its column clamped to the current line
    pub fn actual_cursor(&self) -> Coord {
        self.clamp(self.cursor)
    }

    fn clamp(&self, pos: Coord) -> Coord {
        let row = pos.row.min(self.line_count() - 1);
        Coord::new(row, pos.col.min(self.line_len(row)))
    }

    /// Character offset of a document position
    fn char_offset(&self, pos: Coord) -> usize {
        let pos = self.clamp(pos);
        self.content.line_to_char(pos.row) + pos.col
    }

    /// Expanded column of a document position
    pub fn expanded_col(&self, pos: Coord, tab_width: usize) -> usize {
        columns::expanded_column(self.line(pos.row).chars(), pos.col, tab_width)
    }

    /// Cursor position in (line, expanded column)
    pub fn display_cursor(&self, tab_width: usize) -> Coord {
        let cursor = self.actual_cursor();
        Coord::new(cursor.row, self.expanded_col(cursor, tab_width))
    }

    /// The active selection as an ordered `(start, end)` pair
    pub fn selected_region(&self) -> Option<(Coord, Coord)> {
        let start = self.clamp(self.selection_start?);
        let cursor = self.actual_cursor();
        Some((start.min(cursor), start.max(cursor)))
    }

    // =========================================================================
    // MOVEMENT
    // =========================================================================

    fn with_cursor(&self, cursor: Coord) -> Self {
        Self {
            cursor,
            ..self.clone()
        }
    }

    pub fn move_up(&self) -> Self {
        self.with_cursor(Coord::new(self.cursor.row.saturating_sub(1), self.cursor.col))
    }

    pub fn move_down(&self) -> Self {
        let row = (self.cursor.row + 1).min(self.line_count() - 1);
        self.with_cursor(Coord::new(row, self.cursor.col))
    }

    pub fn move_left(&self) -> Self {
        let cursor = self.actual_cursor();
        if cursor.col > 0 {
            self.with_cursor(Coord::new(cursor.row, cursor.col - 1))
        } else if cursor.row > 0 {
            self.with_cursor(Coord::new(cursor.row - 1, self.line_len(cursor.row - 1)))
        } else {
            self.with_cursor(cursor)
        }
    }

    pub fn move_right(&self) -> Self {
        let cursor = self.actual_cursor();
        if cursor.col < self.line_len(cursor.row) {
            self.with_cursor(Coord::new(cursor.row, cursor.col + 1))
        } else if cursor.row + 1 < self.line_count() {
            self.with_cursor(Coord::new(cursor.row + 1, 0))
        } else {
            self.with_cursor(cursor)
        }
    }

    pub fn move_line_start(&self) -> Self {
        self.with_cursor(Coord::new(self.cursor.row, 0))
    }

    pub fn move_line_end(&self) -> Self {
        self.with_cursor(Coord::new(self.cursor.row, self.line_len(self.cursor.row)))
    }

    pub fn page_down(&self, size: Size) -> Self {
        let last = self.line_count() - 1;
        let page = size.rows.max(1);
        Self {
            cursor: Coord::new((self.cursor.row + page).min(last), self.cursor.col),
            scroll: Coord::new((self.scroll.row + page).min(last), self.scroll.col),
            ..self.clone()
        }
    }

    pub fn page_up(&self, size: Size) -> Self {
        let page = size.rows.max(1);
        Self {
            cursor: Coord::new(self.cursor.row.saturating_sub(page), self.cursor.col),
            scroll: Coord::new(self.scroll.row.saturating_sub(page), self.scroll.col),
            ..self.clone()
        }
    }

    /// Adjust the scroll offset so the display cursor is inside a viewport
    /// of `size`
    pub fn scroll_to_cursor(&self, size: Size, tab_width: usize) -> Self {
        let cursor = self.display_cursor(tab_width);
        let rows = size.rows.max(1);
        let cols = size.cols.max(1);

        let mut scroll = self.scroll;
        if cursor.row < scroll.row {
            scroll.row = cursor.row;
        } else if cursor.row >= scroll.row + rows {
            scroll.row = cursor.row + 1 - rows;
        }
        if cursor.col < scroll.col {
            scroll.col = cursor.col;
        } else if cursor.col >= scroll.col + cols {
            scroll.col = cursor.col + 1 - cols;
        }

        Self {
            scroll,
            ..self.clone()
        }
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    pub fn start_selection(&self) -> Self {
        Self {
            selection_start: Some(self.actual_cursor()),
            ..self.clone()
        }
    }

    pub fn clear_selection(&self) -> Self {
        Self {
            selection_start: None,
            ..self.clone()
        }
    }

    /// Text of the active selection
    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.selected_region()?;
        Some(self.text_between(start, end))
    }

    fn text_between(&self, start: Coord, end: Coord) -> String {
        self.content
            .slice(self.char_offset(start)..self.char_offset(end))
            .to_string()
    }

    // =========================================================================
    // EDITING
    // =========================================================================

    /// Replace a character range, placing the cursor at `cursor`. Edits drop
    /// the selection since its anchor may no longer exist.
    fn splice(&self, range: Range<usize>, text: &str, cursor: Coord) -> Self {
        let mut rope = Rope::clone(&self.content);
        if !range.is_empty() {
            rope.remove(range.clone());
        }
        if !text.is_empty() {
            rope.insert(range.start, text);
        }
        Self {
            content: Arc::new(rope),
            cursor,
            selection_start: None,
            ..self.clone()
        }
    }

    /// Insert text at the cursor, leaving the cursor after it
    pub fn insert_text(&self, text: &str) -> Self {
        let at = self.actual_cursor();
        let offset = self.char_offset(at);

        let mut cursor = at;
        for c in text.chars() {
            if c == '\n' {
                cursor = Coord::new(cursor.row + 1, 0);
            } else {
                cursor.col += 1;
            }
        }
        self.splice(offset..offset, text, cursor)
    }

    pub fn insert_char(&self, c: char) -> Self {
        let mut buf = [0; 4];
        self.insert_text(c.encode_utf8(&mut buf))
    }

    /// Delete the character before the cursor, joining lines at column 0
    pub fn delete_backward(&self) -> Self {
        let cursor = self.actual_cursor();
        if cursor.col > 0 {
            let offset = self.char_offset(cursor);
            self.splice(offset - 1..offset, "", Coord::new(cursor.row, cursor.col - 1))
        } else if cursor.row > 0 {
            let prev = Coord::new(cursor.row - 1, self.line_len(cursor.row - 1));
            self.splice(self.line_break(prev.row), "", prev)
        } else {
            self.with_cursor(cursor)
        }
    }

    /// Delete the character under the cursor, joining lines at the end
    pub fn delete_forward(&self) -> Self {
        let cursor = self.actual_cursor();
        if cursor.col < self.line_len(cursor.row) {
            let offset = self.char_offset(cursor);
            self.splice(offset..offset + 1, "", cursor)
        } else if cursor.row + 1 < self.line_count() {
            self.splice(self.line_break(cursor.row), "", cursor)
        } else {
            self.with_cursor(cursor)
        }
    }

    /// Remove the rest of the line, or the line break when already at its
    /// end. Returns the new buffer and the removed text, or `None` at the
    /// end of the buffer where there is nothing to remove.
    pub fn kill_line(&self) -> Option<(Self, String)> {
        let cursor = self.actual_cursor();
        let range = if cursor.col < self.line_len(cursor.row) {
            let line_start = self.content.line_to_char(cursor.row);
            line_start + cursor.col..line_start + self.line_len(cursor.row)
        } else if cursor.row + 1 < self.line_count() {
            self.line_break(cursor.row)
        } else {
            return None;
        };

        let killed = self.content.slice(range.clone()).to_string();
        Some((self.splice(range, "", cursor), killed))
    }

    /// Remove the selected text. Returns `None` without a selection.
    pub fn cut(&self) -> Option<(Self, String)> {
        let (start, end) = self.selected_region()?;
        let killed = self.text_between(start, end);
        let range = self.char_offset(start)..self.char_offset(end);
        Some((self.splice(range, "", start), killed))
    }

    /// Character range of the terminator ending line `row`
    fn line_break(&self, row: usize) -> Range<usize> {
        let start = self.content.line_to_char(row) + self.line_len(row);
        let end = if row + 1 < self.line_count() {
            self.content.line_to_char(row + 1)
        } else {
            self.content.len_chars()
        };
        start..end
    }
}

/// Length of a line slice once its terminator is stripped
fn text_len(line: RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len == 0 {
        return 0;
    }
    match line.char(len - 1) {
        '\n' if len >= 2 && line.char(len - 2) == '\r' => len - 2,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}' => len - 1,
        _ => len,
    }
}
