#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn from_cells_takes_max_row_and_col() {
    let layout = BoardLayout::from_cells([(0, 0), (1, 3), (0, 2)]);
    assert_eq!(layout.rows, 2);
    assert_eq!(layout.cols, 4);
}

#[test]
fn from_cells_empty_is_zero_grid() {
    let layout = BoardLayout::from_cells(std::iter::empty());
    assert_eq!((layout.rows, layout.cols), (0, 0));
    assert_eq!(layout.width, PADDING * 2.0);
}

#[test]
fn dimensions_include_padding() {
    let layout = BoardLayout::new(2, 4);
    assert_eq!(layout.width, 4.0 * 110.0 + 56.0);
    assert_eq!(layout.height, 2.0 * 110.0 + 56.0);
}

#[test]
fn correct_position_is_cell_corner_plus_padding() {
    let layout = BoardLayout::new(2, 3);
    assert_eq!(layout.correct_position(0, 0), Point::new(28.0, 28.0));
    assert_eq!(layout.correct_position(1, 2), Point::new(2.0 * 110.0 + 28.0, 110.0 + 28.0));
}

#[test]
fn scatter_span_leaves_room_for_one_piece() {
    let layout = BoardLayout::new(2, 4);
    assert_eq!(layout.scatter_span_x(), 3.0 * 110.0);
    assert_eq!(layout.scatter_span_y(), 110.0);
}

#[test]
fn scatter_span_single_cell_is_zero() {
    let layout = BoardLayout::new(1, 1);
    assert_eq!(layout.scatter_span_x(), 0.0);
    assert_eq!(layout.scatter_span_y(), 0.0);
}

#[test]
fn from_cells_saturates_instead_of_overflowing() {
    let layout = BoardLayout::from_cells([(0, usize::MAX)]);
    assert_eq!(layout.rows, 1);
    assert_eq!(layout.cols, usize::MAX);
}
