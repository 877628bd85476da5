#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::board::Board;
use crate::coords::Point;

/// Topmost piece whose outline extents contain `point` (board space).
///
/// Walks the render order from the top so a piece dropped over another wins.
/// Extents include protruding tabs and the corners beside a blank.
#[must_use]
pub fn piece_at(board: &Board, point: Point) -> Option<usize> {
    board
        .render_order()
        .iter()
        .rev()
        .copied()
        .find(|&index| board.piece(index).is_some_and(|p| p.board_bounds().contains(point)))
}
