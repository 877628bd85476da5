//! Home section state: photo carousel and the name/alias toggle.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use crate::content::{ALIAS_NAME, GREETING_NAME};

/// How long the wave stays up after the first switch to the alias.
pub const WAVE_MS: u32 = 1800;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HomeState {
    pub photo_index: usize,
    pub show_alias: bool,
    pub waving: bool,
    /// Set after the first wave; the wave never repeats.
    pub has_waved: bool,
}

impl HomeState {
    /// Advance the carousel, wrapping after `photo_count` photos.
    pub fn cycle_photo(&mut self, photo_count: usize) {
        if photo_count == 0 {
            self.photo_index = 0;
            return;
        }
        self.photo_index = (self.photo_index + 1) % photo_count;
    }

    /// Toggle the displayed name. Returns `true` when this call started the
    /// wave; the host should call [`HomeState::end_wave`] after [`WAVE_MS`].
    pub fn toggle_name(&mut self) -> bool {
        self.show_alias = !self.show_alias;
        if self.show_alias && !self.has_waved {
            self.has_waved = true;
            self.waving = true;
            return true;
        }
        false
    }

    pub fn end_wave(&mut self) {
        self.waving = false;
    }

    pub fn display_name(&self) -> &'static str {
        if self.show_alias { ALIAS_NAME } else { GREETING_NAME }
    }
}
