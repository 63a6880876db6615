//! Viewport arithmetic for one frame: how much of the screen is editor
//! area, which lines are visible, and where the terminal cursor goes.

use std::ops::Range;

use crate::core::geometry::{Coord, Size, Viewport};

/// Rows reserved below the text: the mode line and the message line
pub const RESERVED_ROWS: usize = 2;

/// Size of the text area for a terminal of `terminal` cells
pub fn editor_size(terminal: Size) -> Size {
    Size::new(terminal.rows.saturating_sub(RESERVED_ROWS), terminal.cols)
}

/// Document lines drawn for this viewport: `[scroll.row, scroll.row + rows)`
/// intersected with the document
pub fn visible_lines(viewport: &Viewport, line_count: usize) -> Range<usize> {
    let first = viewport.scroll.row.min(line_count);
    let last = (viewport.scroll.row + viewport.size.rows).min(line_count);
    first..last
}

/// Where the terminal cursor should sit and whether it should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPlacement {
    pub pos: Coord,
    pub visible: bool,
}

/// Place the terminal cursor for a cursor given in (line, expanded column)
pub fn place_cursor(viewport: &Viewport, cursor: Coord) -> CursorPlacement {
    CursorPlacement {
        pos: viewport.to_screen(cursor),
        visible: viewport.contains(cursor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_size_reserves_two_rows() {
        assert_eq!(editor_size(Size::new(24, 80)), Size::new(22, 80));
        assert_eq!(editor_size(Size::new(1, 80)), Size::new(0, 80));
    }

    #[test]
    fn test_visible_lines_clamped_to_document() {
        let vp = Viewport::new(Coord::new(5, 0), Size::new(10, 80));
        assert_eq!(visible_lines(&vp, 100), 5..15);
        assert_eq!(visible_lines(&vp, 8), 5..8);
        assert_eq!(visible_lines(&vp, 3), 3..3);
    }

    #[test]
    fn test_cursor_visibility_bounds() {
        let vp = Viewport::new(Coord::new(10, 4), Size::new(5, 20));
        let inside = place_cursor(&vp, Coord::new(12, 6));
        assert!(inside.visible);
        assert_eq!(inside.pos, Coord::new(2, 2));

        assert!(place_cursor(&vp, Coord::new(10, 4)).visible);
        assert!(!place_cursor(&vp, Coord::new(15, 6)).visible);
        assert!(!place_cursor(&vp, Coord::new(9, 6)).visible);
        assert!(!place_cursor(&vp, Coord::new(12, 3)).visible);
        assert!(!place_cursor(&vp, Coord::new(12, 24)).visible);
        assert!(place_cursor(&vp, Coord::new(14, 23)).visible);
    }
}
