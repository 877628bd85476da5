//! Drag model: pointer buttons and the gesture state machine.
//!
//! `DragState` is the gesture tracked between pointer-down and pointer-up.
//! It carries the cursor-to-piece offset captured at grab time so the piece
//! follows the cursor without jumping to put its corner under the pointer.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::coords::{Point, position_from_visual, visual_origin};

/// Pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button, pen contact, or a touch.
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
    /// Back, forward, or any other auxiliary button.
    Other,
}

impl Button {
    /// Map a DOM `PointerEvent.button` value.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Other,
        }
    }
}

/// Active gesture on the board.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// Nothing held; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A piece is following the cursor.
    Dragging {
        /// Index of the held piece.
        piece: usize,
        /// Cursor minus the piece's visual top-left at grab time, board space.
        offset: Point,
    },
}

impl DragState {
    /// Start a drag of `piece`, currently at `position`, grabbed at `cursor`.
    #[must_use]
    pub fn grab(piece: usize, position: Point, cursor: Point) -> Self {
        Self::Dragging { piece, offset: cursor.sub(visual_origin(position)) }
    }

    /// The held piece, if any.
    #[must_use]
    pub fn piece(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging { piece, .. } => Some(*piece),
        }
    }

    /// Where the held piece's position should be for the cursor at `cursor`.
    #[must_use]
    pub fn follow(&self, cursor: Point) -> Option<(usize, Point)> {
        match self {
            Self::Idle => None,
            Self::Dragging { piece, offset } => Some((*piece, position_from_visual(cursor.sub(*offset)))),
        }
    }
}
