#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{PADDING, PIECE_H, PIECE_W};
use crate::coords::Point;

/// Grid dimensions and pixel size of a board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub rows: usize,
    pub cols: usize,
    /// Full board width including padding on both sides.
    pub width: f64,
    /// Full board height including padding on both sides.
    pub height: f64,
}

impl BoardLayout {
    /// Size the grid to fit every `(row, col)` cell. An empty iterator yields a 0×0 grid.
    pub fn from_cells(cells: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let (rows, cols) = cells
            .into_iter()
            .fold((0, 0), |(rows, cols), (r, c)| (rows.max(r.saturating_add(1)), cols.max(c.saturating_add(1))));
        Self::new(rows, cols)
    }

    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            width: grid_extent(cols, PIECE_W),
            height: grid_extent(rows, PIECE_H),
        }
    }

    /// Board-space position of a cell's content top-left corner.
    #[must_use]
    pub fn correct_position(&self, row: usize, col: usize) -> Point {
        Point::new(cell_offset(col, PIECE_W), cell_offset(row, PIECE_H))
    }

    /// Horizontal range a scattered piece's x may take: `[PADDING, PADDING + span)`.
    #[must_use]
    pub fn scatter_span_x(&self) -> f64 {
        (self.width - PIECE_W - PADDING * 2.0).max(0.0)
    }

    /// Vertical counterpart of [`Self::scatter_span_x`].
    #[must_use]
    pub fn scatter_span_y(&self) -> f64 {
        (self.height - PIECE_H - PADDING * 2.0).max(0.0)
    }
}

#[allow(clippy::cast_precision_loss)]
fn grid_extent(count: usize, cell: f64) -> f64 {
    count as f64 * cell + PADDING * 2.0
}

#[allow(clippy::cast_precision_loss)]
fn cell_offset(index: usize, cell: f64) -> f64 {
    index as f64 * cell + PADDING
}
