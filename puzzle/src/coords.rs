#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use crate::consts::PADDING;

/// A point in either client (viewport) or board space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }

    /// Component-wise sum `self + other`.
    #[must_use]
    pub fn add(self, other: Point) -> Point {
        Point { x: self.x + other.x, y: self.y + other.y }
    }

    /// Squared euclidean distance; enough for comparisons.
    #[must_use]
    pub fn dist_sq(self, other: Point) -> f64 {
        let d = self.sub(other);
        d.x * d.x + d.y * d.y
    }
}

/// Where the board element sits in the viewport.
///
/// `origin_x` / `origin_y` are the client coordinates of the board's top-left
/// corner (from `getBoundingClientRect`). `scale` is rendered width divided by
/// logical board width; 1.0 when the board is drawn at its natural size.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale: f64,
}

impl Default for BoardView {
    fn default() -> Self {
        Self { origin_x: 0.0, origin_y: 0.0, scale: 1.0 }
    }
}

impl BoardView {
    /// Build a view from a bounding rect and the board's logical width.
    ///
    /// A degenerate rect or logical width falls back to scale 1.0.
    #[must_use]
    pub fn from_rect(left: f64, top: f64, rendered_width: f64, logical_width: f64) -> Self {
        let scale = if rendered_width > 0.0 && logical_width > 0.0 {
            rendered_width / logical_width
        } else {
            1.0
        };
        Self { origin_x: left, origin_y: top, scale }
    }

    /// Convert a client-space point (CSS pixels) to board coordinates.
    #[must_use]
    pub fn client_to_board(&self, client: Point) -> Point {
        Point {
            x: (client.x - self.origin_x) / self.scale,
            y: (client.y - self.origin_y) / self.scale,
        }
    }

    /// Convert a board-space point back to client coordinates.
    #[must_use]
    pub fn board_to_client(&self, board: Point) -> Point {
        Point {
            x: board.x * self.scale + self.origin_x,
            y: board.y * self.scale + self.origin_y,
        }
    }
}

/// Top-left of a piece's visual box, which includes room for its tabs.
#[must_use]
pub fn visual_origin(position: Point) -> Point {
    position.sub(Point::new(PADDING, PADDING))
}

/// Inverse of [`visual_origin`].
#[must_use]
pub fn position_from_visual(visual: Point) -> Point {
    visual.add(Point::new(PADDING, PADDING))
}
