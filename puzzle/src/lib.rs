//! Jigsaw engine behind the skills board.
//!
//! This crate owns everything about the puzzle that is not drawing: which
//! sides of each piece carry tabs, the outline each piece is drawn with,
//! converting pointer positions into board space, the drag gesture, the
//! snap-to-target lock, and the scatter/solve cycle. It has no browser
//! dependencies; the `site` crate feeds it pointer events and renders
//! [`board::Board`] state as SVG.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`board`] | Board state machine and [`board::Action`] results |
//! | [`edges`] | Seeded interlocking edge generation |
//! | [`path`] | Piece outline commands and SVG `d` output |
//! | [`coords`] | Points and client-to-board conversion |
//! | [`layout`] | Grid sizing and target positions |
//! | [`drag`] | Pointer buttons and the drag gesture |
//! | [`hit`] | Topmost-piece hit testing |
//! | [`consts`] | Piece size, tab ratios, snap threshold, timings |

pub mod board;
pub mod consts;
pub mod coords;
pub mod drag;
pub mod edges;
pub mod hit;
pub mod layout;
pub mod path;
