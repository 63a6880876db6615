//! Grid coordinates shared by the document and the screen.
//!
//! A `Coord` is either a document position (line, column) or a screen
//! position (row, column). Moving between the two spaces always goes through
//! a `Viewport` scroll offset; nothing converts implicitly.

use std::cmp::Ordering;

/// A row/column pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Row-major ordering: earlier lines first, then earlier columns
impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dimensions of a grid in cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub rows: usize,
    pub cols: usize,
}

impl Size {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

/// The visible window onto a document: top-left document coordinate plus
/// the grid dimensions. Built fresh for every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scroll: Coord,
    pub size: Size,
}

impl Viewport {
    pub const fn new(scroll: Coord, size: Size) -> Self {
        Self { scroll, size }
    }

    /// Whether a document coordinate (in expanded columns) is on screen
    pub fn contains(&self, pos: Coord) -> bool {
        pos.row >= self.scroll.row
            && pos.col >= self.scroll.col
            && pos.row < self.scroll.row + self.size.rows
            && pos.col < self.scroll.col + self.size.cols
    }

    /// Translate a document coordinate into screen space.
    ///
    /// Positions above or left of the scroll origin saturate to zero, so the
    /// result is only meaningful together with [`Viewport::contains`].
    pub fn to_screen(&self, pos: Coord) -> Coord {
        Coord {
            row: pos.row.saturating_sub(self.scroll.row),
            col: pos.col.saturating_sub(self.scroll.col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_row_major_order() {
        assert!(Coord::new(1, 9) < Coord::new(2, 0));
        assert!(Coord::new(2, 3) < Coord::new(2, 4));
        assert_eq!(Coord::new(2, 4).max(Coord::new(1, 80)), Coord::new(2, 4));
    }

    #[test]
    fn test_viewport_contains_bounds() {
        let viewport = Viewport::new(Coord::new(10, 4), Size::new(5, 20));
        assert!(viewport.contains(Coord::new(10, 4)));
        assert!(viewport.contains(Coord::new(14, 23)));
        assert!(!viewport.contains(Coord::new(9, 4)));
        assert!(!viewport.contains(Coord::new(10, 3)));
        assert!(!viewport.contains(Coord::new(15, 4)));
        assert!(!viewport.contains(Coord::new(10, 24)));
    }

    #[test]
    fn test_viewport_to_screen() {
        let viewport = Viewport::new(Coord::new(10, 4), Size::new(5, 20));
        assert_eq!(viewport.to_screen(Coord::new(12, 6)), Coord::new(2, 2));
        assert_eq!(viewport.to_screen(Coord::new(3, 1)), Coord::new(0, 0));
    }
}
