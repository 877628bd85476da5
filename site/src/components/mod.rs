//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections and navigation chrome while reading and
//! writing shared state from Leptos context providers.

pub mod contact_section;
pub mod home_section;
pub mod portfolio_section;
pub mod progress_indicator;
pub mod puzzle_board;
pub mod section_navigation;
pub mod skills_section;
