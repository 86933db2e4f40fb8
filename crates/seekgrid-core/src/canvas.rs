//! The [`Canvas`] type: a rendered snapshot of the search grid.
//!
//! A canvas is what display sinks consume: one styled [`Cell`] per grid
//! position. The terminal sink prints it, the graphical sink paints it.

use std::fmt;

use crate::geom::{Point, Range};
use crate::style::Style;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A styled character cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// An owned 2D buffer of [`Cell`]s, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Canvas {
    /// Create a new canvas of the given dimensions, filled with default cells.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![Cell::default(); bounds.len()],
            bounds,
        }
    }

    /// The bounding range of this canvas.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width() as usize) + (p.x as usize))
    }

    /// Read the cell at `p`. Returns `Cell::default()` if `p` is outside
    /// bounds.
    pub fn at(&self, p: Point) -> Cell {
        self.index(p).map(|i| self.cells[i]).unwrap_or_default()
    }

    /// Set the cell at `p`. No-op if `p` is outside bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().map(move |p| (p, self.at(p)))
    }

    /// The characters of row `y`, left to right.
    pub fn row_chars(&self, y: i32) -> String {
        (0..self.width())
            .map(|x| self.at(Point::new(x, y)).ch)
            .collect()
    }
}

impl fmt::Display for Canvas {
    /// Framed text form: every cell is followed by a space, so the frame is
    /// twice the grid width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.width() as usize * 2);
        writeln!(f, "+{border}+")?;
        for y in 0..self.height() {
            f.write_str("|")?;
            for x in 0..self.width() {
                write!(f, "{} ", self.at(Point::new(x, y)).ch)?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "+{border}+")
    }
}
