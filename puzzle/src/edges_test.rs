use super::*;

use Edge::{Blank as B, Flat as F, Tab as T};

fn edges(top: Edge, right: Edge, bottom: Edge, left: Edge) -> PieceEdges {
    PieceEdges { top, right, bottom, left }
}

fn all_cells(grid: &EdgeGrid) -> Vec<(usize, usize, PieceEdges)> {
    let mut out = Vec::new();
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            out.push((r, c, grid.get(r, c).unwrap()));
        }
    }
    out
}

// =============================================================
// Edge
// =============================================================

#[test]
fn edge_mate_is_opposite() {
    assert_eq!(T.mate(), B);
    assert_eq!(B.mate(), T);
    assert_eq!(F.mate(), F);
}

#[test]
fn edge_direction_signs() {
    assert!(T.direction() > 0.0);
    assert!(B.direction() < 0.0);
    assert!(F.direction().abs() < f64::EPSILON);
}

// =============================================================
// Seeded hash
// =============================================================

#[test]
fn seed_hash_matches_31_polynomial() {
    // 'a' = 97, 'b' = 98 -> 97 * 31 + 98
    assert_eq!(SeededRandom::new("ab").state, 3105);
    assert_eq!(SeededRandom::new("").state, 0);
}

#[test]
fn samples_stay_in_unit_interval() {
    let mut rng = SeededRandom::new("cyber");
    for _ in 0..1000 {
        let s = rng.next_f64();
        assert!((0.0..1.0).contains(&s));
    }
}

// =============================================================
// Grid generation
// =============================================================

#[test]
fn development_grid_is_stable() {
    let grid = EdgeGrid::generate(2, 4, "development");
    assert_eq!(grid.get(0, 0), Some(edges(F, B, T, F)));
    assert_eq!(grid.get(0, 1), Some(edges(F, B, T, T)));
    assert_eq!(grid.get(0, 2), Some(edges(F, T, B, T)));
    assert_eq!(grid.get(0, 3), Some(edges(F, F, B, B)));
    assert_eq!(grid.get(1, 0), Some(edges(B, B, F, F)));
    assert_eq!(grid.get(1, 1), Some(edges(B, T, F, T)));
    assert_eq!(grid.get(1, 2), Some(edges(T, B, F, B)));
    assert_eq!(grid.get(1, 3), Some(edges(T, F, F, T)));
}

#[test]
fn design_grid_is_stable() {
    let grid = EdgeGrid::generate(2, 3, "design");
    assert_eq!(grid.get(0, 0), Some(edges(F, T, T, F)));
    assert_eq!(grid.get(0, 1), Some(edges(F, B, T, B)));
    assert_eq!(grid.get(0, 2), Some(edges(F, F, B, T)));
    assert_eq!(grid.get(1, 0), Some(edges(B, T, F, F)));
    assert_eq!(grid.get(1, 1), Some(edges(B, T, F, B)));
    assert_eq!(grid.get(1, 2), Some(edges(T, F, F, B)));
}

#[test]
fn same_seed_same_grid() {
    assert_eq!(EdgeGrid::generate(3, 5, "cyber"), EdgeGrid::generate(3, 5, "cyber"));
}

#[test]
fn different_seeds_differ() {
    assert_ne!(EdgeGrid::generate(2, 4, "development"), EdgeGrid::generate(2, 4, "cyber"));
}

#[test]
fn outer_border_is_flat() {
    let grid = EdgeGrid::generate(3, 4, "border");
    for (r, c, e) in all_cells(&grid) {
        assert_eq!(r == 0, e.top == F, "top at ({r},{c})");
        assert_eq!(r == 2, e.bottom == F, "bottom at ({r},{c})");
        assert_eq!(c == 0, e.left == F, "left at ({r},{c})");
        assert_eq!(c == 3, e.right == F, "right at ({r},{c})");
    }
}

#[test]
fn neighbours_interlock() {
    for seed in ["development", "design", "cyber", "x"] {
        let grid = EdgeGrid::generate(4, 4, seed);
        for (r, c, e) in all_cells(&grid) {
            if let Some(right) = grid.get(r, c + 1) {
                assert_eq!(right.left, e.right.mate(), "{seed}: ({r},{c}) right");
            }
            if let Some(below) = grid.get(r + 1, c) {
                assert_eq!(below.top, e.bottom.mate(), "{seed}: ({r},{c}) bottom");
            }
        }
    }
}

#[test]
fn single_cell_is_all_flat() {
    let grid = EdgeGrid::generate(1, 1, "solo");
    assert_eq!(grid.get(0, 0), Some(PieceEdges::default()));
}

#[test]
fn get_out_of_range_is_none() {
    let grid = EdgeGrid::generate(2, 2, "s");
    assert_eq!(grid.get(2, 0), None);
    assert_eq!(grid.get(0, 2), None);
}

#[test]
fn empty_grid_has_no_cells() {
    let grid = EdgeGrid::generate(0, 0, "none");
    assert_eq!(grid.get(0, 0), None);
}
