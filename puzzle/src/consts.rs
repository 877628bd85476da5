//! Shared numeric constants for the puzzle crate.

// ── Piece geometry ──────────────────────────────────────────────

/// Width of a piece's content cell in board pixels.
pub const PIECE_W: f64 = 110.0;

/// Height of a piece's content cell in board pixels.
pub const PIECE_H: f64 = 110.0;

/// Nominal tab size; a tab protrudes `TAB_DEPTH × TAB_SIZE` past the cell edge.
pub const TAB_SIZE: f64 = 22.0;

/// Margin around the board content and around each piece's visual box.
pub const PADDING: f64 = TAB_SIZE + 6.0;

// ── Tab outline ratios ──────────────────────────────────────────

/// Where the tab neck starts along a side (fraction of side length).
pub const NECK_START: f64 = 0.35;

/// Where the tab neck ends along a side.
pub const NECK_END: f64 = 0.65;

/// Control point for the shoulder of the tab bulb.
pub const BULB_START: f64 = 0.38;

/// Mirror of [`BULB_START`].
pub const BULB_END: f64 = 0.62;

/// Depth of the tab bulb as a fraction of [`TAB_SIZE`].
pub const TAB_DEPTH: f64 = 0.8;

/// Depth of the first control point, giving the neck its flare.
pub const TAB_SHOULDER: f64 = 0.1;

// ── Interaction ─────────────────────────────────────────────────

/// Per-axis distance (exclusive) from the target at which a dropped piece locks.
pub const SNAP_THRESHOLD: f64 = 30.0;

/// How long the solved overlay stays up before the board returns to idle.
pub const SOLVED_FLASH_MS: u32 = 2500;

/// Largest row or column count a board may span.
pub const MAX_GRID_SIDE: usize = 64;

/// Candidate positions sampled per piece when scattering.
pub const SCATTER_CANDIDATES: usize = 12;
