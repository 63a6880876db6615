//! Selection highlighting for one screen row.
//!
//! `classify` decides how a selection touches a row; `compose` cuts the
//! rendered row text into spans that share a highlight flag.

use crate::core::geometry::Coord;

/// A selection translated into screen space.
///
/// Rows are signed so that a selection starting above the viewport still
/// compares correctly against the visible rows. Columns are expanded and
/// already shifted by the horizontal scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSelection {
    pub start_row: isize,
    pub start_col: usize,
    pub end_row: isize,
    pub end_col: usize,
}

impl ScreenSelection {
    /// Translate a `(start, end)` pair given in (line, expanded column) by
    /// the scroll origin
    pub fn from_document(start: Coord, end: Coord, scroll: Coord) -> Self {
        let row = |r: usize| r as isize - scroll.row as isize;
        Self {
            start_row: row(start.row),
            start_col: start.col.saturating_sub(scroll.col),
            end_row: row(end.row),
            end_col: end.col.saturating_sub(scroll.col),
        }
    }
}

/// How a selection covers a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHighlight {
    /// Selection starts and ends on this row
    Range { from: usize, to: usize },
    /// Selection starts here and continues below
    FromColumnToEdge(usize),
    /// Selection started above and ends here
    UpToColumn(usize),
    /// Row lies strictly inside a multi-row selection
    WholeRow,
    None,
}

/// A run of cells sharing one highlight flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSpan {
    pub text: String,
    pub highlighted: bool,
    /// The highlight continues through the blank fill to the right edge
    pub fill_to_edge: bool,
}

impl RenderSpan {
    fn plain(text: String) -> Self {
        Self {
            text,
            highlighted: false,
            fill_to_edge: false,
        }
    }

    fn highlighted(text: String, fill_to_edge: bool) -> Self {
        Self {
            text,
            highlighted: true,
            fill_to_edge,
        }
    }
}

pub fn classify(row: usize, selection: Option<&ScreenSelection>) -> RowHighlight {
    let Some(sel) = selection else {
        return RowHighlight::None;
    };
    let r = row as isize;

    if sel.start_row == r && sel.end_row == r {
        RowHighlight::Range {
            from: sel.start_col,
            to: sel.end_col,
        }
    } else if sel.start_row == r {
        RowHighlight::FromColumnToEdge(sel.start_col)
    } else if sel.end_row == r {
        RowHighlight::UpToColumn(sel.end_col)
    } else if sel.start_row < r && r < sel.end_row {
        RowHighlight::WholeRow
    } else {
        RowHighlight::None
    }
}

/// Split `rendered` into spans according to `highlight`. Column indices are
/// clamped to the text, so an out-of-range selection never panics.
pub fn compose(rendered: &str, highlight: RowHighlight) -> Vec<RenderSpan> {
    let len = rendered.chars().count();
    let cut = |from: usize, to: usize| -> String {
        let from = from.min(len);
        let to = to.clamp(from, len);
        rendered.chars().skip(from).take(to - from).collect()
    };

    let spans = match highlight {
        RowHighlight::None => vec![RenderSpan::plain(rendered.to_string())],
        RowHighlight::Range { from, to } => vec![
            RenderSpan::plain(cut(0, from)),
            RenderSpan::highlighted(cut(from, to), false),
            RenderSpan::plain(cut(to, len)),
        ],
        RowHighlight::FromColumnToEdge(from) => vec![
            RenderSpan::plain(cut(0, from)),
            RenderSpan::highlighted(cut(from, len), true),
        ],
        RowHighlight::UpToColumn(to) => vec![
            RenderSpan::highlighted(cut(0, to), false),
            RenderSpan::plain(cut(to, len)),
        ],
        RowHighlight::WholeRow => vec![RenderSpan::highlighted(rendered.to_string(), true)],
    };

    let mut spans: Vec<RenderSpan> = spans
        .into_iter()
        .filter(|span| !span.text.is_empty() || span.fill_to_edge)
        .collect();
    if spans.is_empty() {
        spans.push(RenderSpan::plain(String::new()));
    }
    spans
}
