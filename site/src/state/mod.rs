//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by section (`navigation`, `home`, `skills`) so each
//! component depends on one small model provided through Leptos context.

pub mod home;
pub mod navigation;
pub mod skills;
