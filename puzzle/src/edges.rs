//! Seeded edge-shape generation.
//!
//! Every interior border between two cells is decided once, by the cell above
//! or to the left, and mirrored onto its neighbour. That is what makes the
//! pieces mate: where one side has a tab, the adjacent side has a blank.
//!
//! The generator is a tiny integer hash, not a general-purpose RNG. It only
//! has to be stable: the same seed (a tab key such as `"design"`) must always
//! produce the same board.

#[cfg(test)]
#[path = "edges_test.rs"]
mod edges_test;

use crate::consts::MAX_GRID_SIDE;

/// Shape of one side of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edge {
    /// Straight side on the board border.
    #[default]
    Flat,
    /// Protrudes outward.
    Tab,
    /// Indents inward to receive a neighbour's tab.
    Blank,
}

impl Edge {
    /// Outward direction: +1 for a tab, -1 for a blank, 0 for flat.
    #[must_use]
    pub fn direction(self) -> f64 {
        match self {
            Self::Flat => 0.0,
            Self::Tab => 1.0,
            Self::Blank => -1.0,
        }
    }

    /// The shape the adjacent piece needs on the shared border.
    #[must_use]
    pub fn mate(self) -> Self {
        match self {
            Self::Flat => Self::Flat,
            Self::Tab => Self::Blank,
            Self::Blank => Self::Tab,
        }
    }
}

/// The four sides of a single piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceEdges {
    pub top: Edge,
    pub right: Edge,
    pub bottom: Edge,
    pub left: Edge,
}

/// Row-major grid of piece edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeGrid {
    rows: usize,
    cols: usize,
    cells: Vec<PieceEdges>,
}

impl EdgeGrid {
    /// Generate interlocking edges for a `rows × cols` grid.
    ///
    /// Cells are visited row-major. Each cell draws its right side (unless it
    /// is in the last column) and then its bottom side (unless it is in the
    /// last row); top and left are copied from the neighbours.
    #[must_use]
    pub fn generate(rows: usize, cols: usize, seed: &str) -> Self {
        let mut rng = SeededRandom::new(seed);
        let mut cells: Vec<PieceEdges> = Vec::with_capacity(rows.saturating_mul(cols).min(MAX_GRID_SIDE * MAX_GRID_SIDE));

        for r in 0..rows {
            for c in 0..cols {
                let top = if r == 0 { Edge::Flat } else { cells[(r - 1) * cols + c].bottom.mate() };
                let right = if c + 1 == cols { Edge::Flat } else { rng.next_edge() };
                let bottom = if r + 1 == rows { Edge::Flat } else { rng.next_edge() };
                let left = if c == 0 { Edge::Flat } else { cells[r * cols + c - 1].right.mate() };
                cells.push(PieceEdges { top, right, bottom, left });
            }
        }

        Self { rows, cols, cells }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Edges of the cell at (`row`, `col`), or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<PieceEdges> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }
}

/// 32-bit string hash followed by a multiply-xorshift step per sample.
struct SeededRandom {
    state: i32,
}

impl SeededRandom {
    fn new(seed: &str) -> Self {
        let state = seed
            .encode_utf16()
            .fold(0_i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
        Self { state }
    }

    /// Next sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        let h = self.state;
        let shifted = (h.cast_unsigned() >> 16).cast_signed();
        self.state = (h ^ shifted).wrapping_mul(0x045d_9f3b).wrapping_add(0x12345);
        f64::from(self.state.cast_unsigned()) / 4_294_967_296.0
    }

    fn next_edge(&mut self) -> Edge {
        if self.next_f64() > 0.5 { Edge::Tab } else { Edge::Blank }
    }
}
