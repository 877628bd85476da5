//! Piece outline construction.
//!
//! A piece outline starts at its top-left content corner and walks the four
//! sides clockwise. A flat side is a single line. A tab or blank side is a
//! line to the neck, two cubic Béziers for the bulb, and a line to the next
//! corner. All sides share one parametrisation: position along the side plus
//! displacement along the side's outward normal, so a blank is just a tab
//! with a negative direction.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use crate::consts::{BULB_END, BULB_START, NECK_END, NECK_START, TAB_DEPTH, TAB_SHOULDER};
use crate::coords::Point;
use crate::edges::{Edge, PieceEdges};

/// One drawing command in a piece outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
    Close,
}

/// Axis-aligned extents of an outline, in piece-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Shift by `offset`.
    #[must_use]
    pub fn translate(&self, offset: Point) -> Bounds {
        Bounds {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }
}

/// A closed piece outline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PiecePath {
    cmds: Vec<PathCmd>,
}

impl PiecePath {
    #[cfg(test)]
    pub(crate) fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// Render as an SVG path `d` attribute.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut d = String::new();
        for cmd in &self.cmds {
            if !d.is_empty() {
                d.push(' ');
            }
            match cmd {
                PathCmd::MoveTo(p) => write_cmd(&mut d, 'M', &[*p]),
                PathCmd::LineTo(p) => write_cmd(&mut d, 'L', &[*p]),
                PathCmd::CubicTo { c1, c2, to } => write_cmd(&mut d, 'C', &[*c1, *c2, *to]),
                PathCmd::Close => d.push('Z'),
            }
        }
        d
    }

    /// Extents of every point in the path, control points included.
    ///
    /// Control points sit on the bulb's extreme depth, so this is the exact
    /// outer extent of the tabs rather than a loose hull.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds { min_x: 0.0, min_y: 0.0, max_x: 0.0, max_y: 0.0 };
        let mut first = true;
        let mut include = |p: Point| {
            if first {
                bounds = Bounds { min_x: p.x, min_y: p.y, max_x: p.x, max_y: p.y };
                first = false;
            } else {
                bounds.min_x = bounds.min_x.min(p.x);
                bounds.min_y = bounds.min_y.min(p.y);
                bounds.max_x = bounds.max_x.max(p.x);
                bounds.max_y = bounds.max_y.max(p.y);
            }
        };
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => include(p),
                PathCmd::CubicTo { c1, c2, to } => {
                    include(c1);
                    include(c2);
                    include(to);
                }
                PathCmd::Close => {}
            }
        }
        bounds
    }
}

/// Build the outline for a `w × h` piece with the given side shapes.
#[must_use]
pub fn build_piece_path(edges: PieceEdges, w: f64, h: f64, tab: f64) -> PiecePath {
    let top_left = Point::new(0.0, 0.0);
    let top_right = Point::new(w, 0.0);
    let bottom_right = Point::new(w, h);
    let bottom_left = Point::new(0.0, h);

    let mut cmds = vec![PathCmd::MoveTo(top_left)];
    push_side(&mut cmds, Side { from: top_left, to: top_right, normal: Point::new(0.0, -1.0) }, edges.top, tab);
    push_side(&mut cmds, Side { from: top_right, to: bottom_right, normal: Point::new(1.0, 0.0) }, edges.right, tab);
    push_side(&mut cmds, Side { from: bottom_right, to: bottom_left, normal: Point::new(0.0, 1.0) }, edges.bottom, tab);
    push_side(&mut cmds, Side { from: bottom_left, to: top_left, normal: Point::new(-1.0, 0.0) }, edges.left, tab);
    cmds.push(PathCmd::Close);

    PiecePath { cmds }
}

#[derive(Clone, Copy)]
struct Side {
    from: Point,
    to: Point,
    normal: Point,
}

impl Side {
    /// Point at fraction `along` of the side, pushed `out` along the normal.
    fn at(self, along: f64, out: f64) -> Point {
        Point {
            x: self.from.x + (self.to.x - self.from.x) * along + self.normal.x * out,
            y: self.from.y + (self.to.y - self.from.y) * along + self.normal.y * out,
        }
    }
}

fn push_side(cmds: &mut Vec<PathCmd>, side: Side, edge: Edge, tab: f64) {
    if edge == Edge::Flat {
        cmds.push(PathCmd::LineTo(side.to));
        return;
    }
    let depth = edge.direction() * tab * TAB_DEPTH;
    let shoulder = edge.direction() * tab * TAB_SHOULDER;

    cmds.push(PathCmd::LineTo(side.at(NECK_START, 0.0)));
    cmds.push(PathCmd::CubicTo {
        c1: side.at(NECK_START, shoulder),
        c2: side.at(BULB_START, depth),
        to: side.at(0.5, depth),
    });
    cmds.push(PathCmd::CubicTo {
        c1: side.at(BULB_END, depth),
        c2: side.at(NECK_END, shoulder),
        to: side.at(NECK_END, 0.0),
    });
    cmds.push(PathCmd::LineTo(side.to));
}

fn write_cmd(d: &mut String, op: char, points: &[Point]) {
    d.push(op);
    for p in points {
        d.push(' ');
        d.push_str(&fmt_num(p.x));
        d.push(' ');
        d.push_str(&fmt_num(p.y));
    }
}

/// Up to three decimals, trailing zeros and negative zero removed.
fn fmt_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded.abs() < 1e-9 {
        return "0".to_owned();
    }
    let s = format!("{rounded:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}
