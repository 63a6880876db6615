//! Tab-expanding line renderer.
//!
//! Produces exactly the characters of one document line that fall inside a
//! horizontal window of the expanded line.

use crate::core::columns;

/// Render `line` starting at expanded column `first_col`, emitting at most
/// `width` cells. Tabs become spaces up to the next tab stop; only the part
/// of a tab inside the window is emitted. A trailing line terminator is
/// not drawn.
pub fn render(line: &str, first_col: usize, width: usize, tab_width: usize) -> String {
    let line = line
        .strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line);
    render_chars(line.chars(), first_col, width, tab_width)
}

/// Same as [`render`] over any character iterator, e.g. a rope slice
pub fn render_chars<I>(chars: I, first_col: usize, width: usize, tab_width: usize) -> String
where
    I: IntoIterator<Item = char>,
{
    let last_col = first_col + width;
    let mut out = String::with_capacity(width);
    let mut emitted = 0;
    let mut col = 0;

    for c in chars {
        if emitted >= width || col >= last_col {
            break;
        }
        let next = columns::advance(col, c, tab_width);
        if c == '\t' {
            let visible = next.min(last_col).saturating_sub(col.max(first_col));
            for _ in 0..visible.min(width - emitted) {
                out.push(' ');
                emitted += 1;
            }
        } else if col >= first_col {
            out.push(c);
            emitted += 1;
        }
        col = next;
    }
    out
}
