//! Viewport size queries.
//!
//! Browser-only: SSR paths report no width, which counts as desktop.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Widths below this many CSS pixels are treated as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

/// Current `window.innerWidth` in CSS pixels.
pub fn width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Whether the page is currently laid out for a small screen.
pub fn is_mobile() -> bool {
    width().is_some_and(is_mobile_width)
}
