#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn point_approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_arithmetic() {
    let a = Point::new(5.0, 7.0);
    let b = Point::new(2.0, 3.0);
    assert_eq!(a.sub(b), Point::new(3.0, 4.0));
    assert_eq!(a.add(b), Point::new(7.0, 10.0));
    assert_eq!(a.dist_sq(b), 25.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

// =============================================================
// BoardView
// =============================================================

#[test]
fn identity_view_is_passthrough() {
    let view = BoardView::default();
    let p = Point::new(42.0, -7.5);
    assert!(point_approx_eq(view.client_to_board(p), p));
    assert!(point_approx_eq(view.board_to_client(p), p));
}

#[test]
fn client_to_board_subtracts_origin() {
    let view = BoardView { origin_x: 100.0, origin_y: 250.0, scale: 1.0 };
    let p = view.client_to_board(Point::new(130.0, 260.0));
    assert!(point_approx_eq(p, Point::new(30.0, 10.0)));
}

#[test]
fn client_to_board_divides_by_scale() {
    let view = BoardView { origin_x: 10.0, origin_y: 20.0, scale: 0.5 };
    let p = view.client_to_board(Point::new(60.0, 70.0));
    assert!(point_approx_eq(p, Point::new(100.0, 100.0)));
}

#[test]
fn board_to_client_inverts_client_to_board() {
    let view = BoardView { origin_x: -13.0, origin_y: 8.0, scale: 0.75 };
    let board = Point::new(200.0, 91.0);
    let back = view.client_to_board(view.board_to_client(board));
    assert!(point_approx_eq(back, board));
}

#[test]
fn from_rect_computes_scale() {
    let view = BoardView::from_rect(5.0, 6.0, 248.0, 496.0);
    assert_eq!(view.origin_x, 5.0);
    assert_eq!(view.origin_y, 6.0);
    assert_eq!(view.scale, 0.5);
}

#[test]
fn from_rect_with_zero_width_falls_back_to_unit_scale() {
    assert_eq!(BoardView::from_rect(0.0, 0.0, 0.0, 496.0).scale, 1.0);
    assert_eq!(BoardView::from_rect(0.0, 0.0, 300.0, 0.0).scale, 1.0);
}

// =============================================================
// Visual box
// =============================================================

#[test]
fn visual_origin_is_offset_by_padding() {
    let v = visual_origin(Point::new(PADDING, PADDING));
    assert!(point_approx_eq(v, Point::new(0.0, 0.0)));
}

#[test]
fn position_from_visual_inverts_visual_origin() {
    let pos = Point::new(138.0, 28.0);
    assert!(point_approx_eq(position_from_visual(visual_origin(pos)), pos));
}
