//! Body scroll lock for small screens.
//!
//! On mobile the page moves only through the continue button, so the body is
//! pinned in place. Styles are written inline on `<body>` and cleared again
//! when the lock is released.
//!
//! TRADE-OFFS
//! ==========
//! Browser-only; SSR paths no-op so server output never carries the lock.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// Inline body styles set by the lock.
pub const LOCK_STYLES: [(&str, &str); 4] =
    [("overflow", "hidden"), ("position", "fixed"), ("width", "100%"), ("height", "100%")];

/// Style values for `locked`: the lock values, or empty strings to clear them.
pub fn body_styles(locked: bool) -> [(&'static str, &'static str); 4] {
    LOCK_STYLES.map(|(name, value)| (name, if locked { value } else { "" }))
}

/// Apply or release the lock on `<body>`.
pub fn apply(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        for (name, value) in body_styles(locked) {
            if style.set_property(name, value).is_err() {
                log::warn!("scroll lock: could not set body {name}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
