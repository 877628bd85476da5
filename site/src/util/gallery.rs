//! Portfolio row scrolling, hover, and card media selection.
//!
//! Rows scroll horizontally. Arrow buttons step by [`SCROLL_STEP`] with
//! smooth scrolling, and a mostly vertical wheel gesture is turned into
//! horizontal movement so a mouse wheel can page through a row.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::content::Project;

/// Pixels moved per arrow click.
pub const SCROLL_STEP: f64 = 340.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    pub fn delta(self) -> f64 {
        match self {
            ScrollDirection::Left => -SCROLL_STEP,
            ScrollDirection::Right => SCROLL_STEP,
        }
    }
}

/// Horizontal scroll for a wheel event, if it should be redirected.
///
/// Only mostly vertical gestures are taken; the caller prevents the default
/// page scroll when this returns `Some`.
pub fn wheel_to_horizontal(delta_x: f64, delta_y: f64) -> Option<f64> {
    (delta_y.abs() > delta_x.abs()).then_some(delta_y)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

pub fn media_kind(url: &str) -> MediaKind {
    if url.ends_with(".mp4") { MediaKind::Video } else { MediaKind::Image }
}

/// What a project card shows in its media area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardMedia {
    /// Side-by-side strip of images and videos.
    Strip(&'static [&'static str]),
    Single { url: &'static str, kind: MediaKind },
    /// Tinted block with the project initial.
    Placeholder { color: &'static str },
}

pub fn card_media(project: &Project) -> CardMedia {
    if !project.gallery.is_empty() {
        return CardMedia::Strip(project.gallery);
    }
    match project.thumbnail {
        Some(url) => CardMedia::Single { url, kind: media_kind(url) },
        None => CardMedia::Placeholder { color: project.color },
    }
}

/// Hovered card within one row. Leaving the row clears it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowHover {
    pub hovered: Option<&'static str>,
}

impl RowHover {
    pub fn enter(&mut self, project_id: &'static str) {
        self.hovered = Some(project_id);
    }

    pub fn leave_row(&mut self) {
        self.hovered = None;
    }

    pub fn is_hovered(&self, project_id: &str) -> bool {
        self.hovered == Some(project_id)
    }
}

/// Scroll `element` horizontally by `left` pixels.
#[cfg(feature = "hydrate")]
pub fn scroll_row(element: &web_sys::Element, left: f64, smooth: bool) {
    let options = web_sys::ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(if smooth { web_sys::ScrollBehavior::Smooth } else { web_sys::ScrollBehavior::Auto });
    element.scroll_by_with_scroll_to_options(&options);
}
