//! Expanded-column arithmetic.
//!
//! Cursor positions, selections and horizontal scroll are all measured in
//! expanded columns: every character takes one column except tab, which
//! advances to the next multiple of the tab width.

/// Column of the tab stop following `col`
pub fn next_tab_stop(col: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    col + tab_width - col % tab_width
}

/// Expanded column at which the character with index `char_idx` starts
pub fn expanded_column<I>(chars: I, char_idx: usize, tab_width: usize) -> usize
where
    I: IntoIterator<Item = char>,
{
    chars
        .into_iter()
        .take(char_idx)
        .fold(0, |col, c| advance(col, c, tab_width))
}

/// Total expanded width of a line
pub fn expanded_width<I>(chars: I, tab_width: usize) -> usize
where
    I: IntoIterator<Item = char>,
{
    chars.into_iter().fold(0, |col, c| advance(col, c, tab_width))
}

/// Column after drawing `c` at `col`
pub fn advance(col: usize, c: char, tab_width: usize) -> usize {
    if c == '\t' {
        next_tab_stop(col, tab_width)
    } else {
        col + 1
    }
}
