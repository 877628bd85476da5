//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod color;
pub mod gallery;
pub mod scroll_lock;
pub mod sections;
pub mod viewport;
