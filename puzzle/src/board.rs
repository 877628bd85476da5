use rand::Rng;
use thiserror::Error;

use crate::consts::{MAX_GRID_SIDE, PADDING, PIECE_H, PIECE_W, SCATTER_CANDIDATES, SNAP_THRESHOLD, TAB_SIZE};
use crate::coords::Point;
use crate::drag::{Button, DragState};
use crate::edges::{EdgeGrid, PieceEdges};
use crate::hit::piece_at;
use crate::layout::BoardLayout;
use crate::path::{Bounds, PiecePath, build_piece_path};

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

/// Input description of one piece: a skill id on a grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSpec {
    pub id: String,
    pub row: usize,
    pub col: usize,
}

impl PieceSpec {
    pub fn new(id: impl Into<String>, row: usize, col: usize) -> Self {
        Self { id: id.into(), row, col }
    }
}

/// A piece on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub id: String,
    pub row: usize,
    pub col: usize,
    pub edges: PieceEdges,
    /// Outline in piece-local coordinates (content corner at the origin).
    pub outline: PiecePath,
    /// Local extents of `outline`.
    pub outline_bounds: Bounds,
    /// Current content top-left, board space.
    pub position: Point,
    /// Target content top-left, board space.
    pub correct: Point,
    pub locked: bool,
}

impl Piece {
    /// Outline extents at the piece's current position, board space.
    #[must_use]
    pub fn board_bounds(&self) -> Bounds {
        self.outline_bounds.translate(self.position)
    }

    /// Whether the piece is close enough to its target to lock.
    #[must_use]
    pub fn within_snap(&self) -> bool {
        (self.position.x - self.correct.x).abs() < SNAP_THRESHOLD
            && (self.position.y - self.correct.y).abs() < SNAP_THRESHOLD
    }
}

/// Where the board is in its scatter/solve cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Assembled (or freely rearranged) with no puzzle in progress.
    #[default]
    Idle,
    /// Pieces were scattered; locking the last one solves the board.
    Scattered,
    /// Just solved; the overlay stays until `dismiss_flash(flash)`.
    SolvedFlash { flash: u32 },
}

/// Changes reported back to the host after each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Grabbed { piece: usize },
    Moved { piece: usize },
    Dropped { piece: usize },
    Locked { piece: usize },
    /// Every piece locked after a scatter. The host should call
    /// [`Board::dismiss_flash`] with `flash` once the overlay has shown.
    Solved { flash: u32 },
    FlashEnded,
    Scattered,
    Collected,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no pieces")]
    Empty,
    #[error("duplicate piece id `{0}`")]
    DuplicateId(String),
    #[error("cell ({row}, {col}) is claimed by both `{first}` and `{second}`")]
    DuplicateCell { row: usize, col: usize, first: String, second: String },
    #[error("piece `{id}` sits at ({row}, {col}), outside the {max}×{max} grid limit")]
    CellOutOfRange { id: String, row: usize, col: usize, max: usize },
}

/// Jigsaw board state: pieces, drag gesture, render order, and phase.
///
/// Contains no browser types so the whole interaction can be driven from
/// tests. The host converts DOM pointer events to board space (see
/// [`crate::coords::BoardView`]) and reacts to the returned [`Action`]s.
#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<Piece>,
    layout: BoardLayout,
    phase: Phase,
    drag: DragState,
    /// Piece indices bottom to top.
    order: Vec<usize>,
    next_flash: u32,
}

impl Board {
    /// Build an assembled board. `seed` keys the edge shapes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] when `specs` is empty, reuses an id or a cell,
    /// or places a piece beyond [`MAX_GRID_SIDE`].
    pub fn new(specs: &[PieceSpec], seed: &str) -> Result<Self, BoardError> {
        if specs.is_empty() {
            return Err(BoardError::Empty);
        }
        for (i, spec) in specs.iter().enumerate() {
            if spec.row >= MAX_GRID_SIDE || spec.col >= MAX_GRID_SIDE {
                return Err(BoardError::CellOutOfRange {
                    id: spec.id.clone(),
                    row: spec.row,
                    col: spec.col,
                    max: MAX_GRID_SIDE,
                });
            }
            for earlier in &specs[..i] {
                if earlier.id == spec.id {
                    return Err(BoardError::DuplicateId(spec.id.clone()));
                }
                if earlier.row == spec.row && earlier.col == spec.col {
                    return Err(BoardError::DuplicateCell {
                        row: spec.row,
                        col: spec.col,
                        first: earlier.id.clone(),
                        second: spec.id.clone(),
                    });
                }
            }
        }

        let layout = BoardLayout::from_cells(specs.iter().map(|s| (s.row, s.col)));
        let grid = EdgeGrid::generate(layout.rows, layout.cols, seed);
        let pieces = specs
            .iter()
            .map(|spec| {
                let edges = grid.get(spec.row, spec.col).unwrap_or_default();
                let outline = build_piece_path(edges, PIECE_W, PIECE_H, TAB_SIZE);
                let outline_bounds = outline.bounds();
                let correct = layout.correct_position(spec.row, spec.col);
                Piece {
                    id: spec.id.clone(),
                    row: spec.row,
                    col: spec.col,
                    edges,
                    outline,
                    outline_bounds,
                    position: correct,
                    correct,
                    locked: false,
                }
            })
            .collect::<Vec<_>>();
        let order = (0..pieces.len()).collect();

        Ok(Self { pieces, layout, phase: Phase::Idle, drag: DragState::Idle, order, next_flash: 0 })
    }

    // --- Queries ---

    #[must_use]
    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[must_use]
    pub fn piece(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_scattered(&self) -> bool {
        self.phase == Phase::Scattered
    }

    #[must_use]
    pub fn is_flashing(&self) -> bool {
        matches!(self.phase, Phase::SolvedFlash { .. })
    }

    /// The piece currently held, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<usize> {
        self.drag.piece()
    }

    /// Piece indices from bottom to top.
    #[must_use]
    pub fn render_order(&self) -> &[usize] {
        &self.order
    }

    /// Stacking position of `index`; higher draws on top.
    #[must_use]
    pub fn z_index(&self, index: usize) -> usize {
        self.order.iter().position(|&i| i == index).unwrap_or(0)
    }

    #[must_use]
    pub fn all_locked(&self) -> bool {
        self.pieces.iter().all(|p| p.locked)
    }

    // --- Pointer input ---

    /// Pointer pressed at `cursor` (board space). Grabs the topmost piece under it.
    pub fn pointer_down(&mut self, cursor: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        match piece_at(self, cursor) {
            Some(index) => self.grab(index, cursor),
            None => Vec::new(),
        }
    }

    /// Grab a specific piece. Locked pieces and a second concurrent grab are ignored.
    pub fn grab(&mut self, index: usize, cursor: Point) -> Vec<Action> {
        if self.drag != DragState::Idle {
            return Vec::new();
        }
        let Some(piece) = self.pieces.get(index) else {
            return Vec::new();
        };
        if piece.locked {
            return Vec::new();
        }
        self.drag = DragState::grab(index, piece.position, cursor);
        self.raise(index);
        vec![Action::Grabbed { piece: index }]
    }

    /// Pointer moved to `cursor` (board space).
    pub fn pointer_move(&mut self, cursor: Point) -> Vec<Action> {
        let Some((index, position)) = self.drag.follow(cursor) else {
            return Vec::new();
        };
        let Some(piece) = self.pieces.get_mut(index) else {
            return Vec::new();
        };
        piece.position = position;
        vec![Action::Moved { piece: index }]
    }

    /// Pointer released or cancelled. Snaps and locks the held piece if it is
    /// within [`SNAP_THRESHOLD`] of its target on both axes.
    pub fn pointer_up(&mut self) -> Vec<Action> {
        let Some(index) = self.drag.piece() else {
            return Vec::new();
        };
        self.drag = DragState::Idle;

        let mut actions = vec![Action::Dropped { piece: index }];
        let Some(piece) = self.pieces.get_mut(index) else {
            return actions;
        };
        if !piece.within_snap() {
            return actions;
        }
        piece.position = piece.correct;
        piece.locked = true;
        actions.push(Action::Locked { piece: index });

        if self.phase == Phase::Scattered && self.all_locked() {
            let flash = self.next_flash;
            self.next_flash = self.next_flash.wrapping_add(1);
            self.phase = Phase::SolvedFlash { flash };
            actions.push(Action::Solved { flash });
        }
        actions
    }

    // --- Board controls ---

    /// Move every piece to a random spot inside the content area and unlock it.
    ///
    /// Each piece takes the best of [`SCATTER_CANDIDATES`] samples: the one
    /// farthest from pieces already placed, which spreads the layout out.
    pub fn scatter<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Action> {
        let span_x = self.layout.scatter_span_x();
        let span_y = self.layout.scatter_span_y();
        let mut placed: Vec<Point> = Vec::with_capacity(self.pieces.len());

        for piece in &mut self.pieces {
            let mut best = Point::default();
            let mut best_score = f64::NEG_INFINITY;
            for _ in 0..SCATTER_CANDIDATES {
                let candidate = Point::new(
                    PADDING + rng.random::<f64>() * span_x,
                    PADDING + rng.random::<f64>() * span_y,
                );
                let score = placed
                    .iter()
                    .map(|p| p.dist_sq(candidate))
                    .fold(f64::INFINITY, f64::min);
                if score > best_score {
                    best = candidate;
                    best_score = score;
                }
            }
            placed.push(best);
            piece.position = best;
            piece.locked = false;
        }

        self.drag = DragState::Idle;
        self.phase = Phase::Scattered;
        vec![Action::Scattered]
    }

    /// Put every piece back on its target, unlocked.
    pub fn solve(&mut self) -> Vec<Action> {
        for piece in &mut self.pieces {
            piece.position = piece.correct;
            piece.locked = false;
        }
        self.drag = DragState::Idle;
        self.phase = Phase::Idle;
        vec![Action::Collected]
    }

    /// The Scatter/Collect button.
    pub fn toggle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Action> {
        if self.is_scattered() { self.solve() } else { self.scatter(rng) }
    }

    /// Carry on numbering flashes after `previous`, so a dismissal timer
    /// scheduled for the board this one replaces cannot end its overlay.
    pub fn continue_flash_ids(&mut self, previous: &Board) {
        self.next_flash = previous.next_flash;
    }

    /// End the solved overlay. Ignored unless `flash` is the current one.
    pub fn dismiss_flash(&mut self, flash: u32) -> Vec<Action> {
        if self.phase != (Phase::SolvedFlash { flash }) {
            return Vec::new();
        }
        self.phase = Phase::Idle;
        vec![Action::FlashEnded]
    }

    fn raise(&mut self, index: usize) {
        self.order.retain(|&i| i != index);
        self.order.push(index);
    }
}
