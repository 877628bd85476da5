//! Section order and active-section tracking.
//!
//! DESIGN
//! ======
//! The page is a fixed sequence of scroll-snapped sections. The browser
//! reports which one is in view through an `IntersectionObserver`; this module
//! owns the pure rules (which entries count, what "continue" does, how the
//! progress indicator is filled) so they can be tested without a DOM.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::content::{LABEL_BACK_TO_HOME, LABEL_CONTINUE};

/// Visible fraction a section needs before it becomes current.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Page sections, top to bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Skills,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::Skills, Section::Portfolio, Section::Contact];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Skills => "skills",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Skills => "Skills",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Self::ALL.iter().copied().find(|s| s.id() == id)
    }

    pub fn is_last(self) -> bool {
        self.index() + 1 == Self::ALL.len()
    }

    /// Target of the continue button. Wraps to `Home` from the last section.
    pub fn next(self) -> Section {
        Self::from_index(self.index() + 1).unwrap_or(Section::Home)
    }
}

/// One `IntersectionObserverEntry`, reduced to what matters here.
#[derive(Clone, Debug, PartialEq)]
pub struct Visibility {
    pub id: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Current section plus the rules that move it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current: Section,
}

impl NavigationState {
    /// Apply a batch of observer entries. Returns the new section if it changed.
    ///
    /// Entries are applied in order, so the last qualifying entry wins.
    /// Unknown ids and entries at or below the threshold are ignored.
    pub fn observe(&mut self, entries: &[Visibility]) -> Option<Section> {
        let before = self.current;
        for entry in entries {
            if !entry.is_intersecting || entry.ratio <= VISIBILITY_THRESHOLD {
                continue;
            }
            if let Some(section) = Section::from_id(&entry.id) {
                self.current = section;
            }
        }
        (self.current != before).then_some(self.current)
    }

    /// Where the continue button goes.
    pub fn continue_target(&self) -> Section {
        self.current.next()
    }

    pub fn continue_label(&self) -> &'static str {
        if self.current.is_last() { LABEL_BACK_TO_HOME } else { LABEL_CONTINUE }
    }

    /// Progress dot `index` is the current section.
    pub fn dot_active(&self, index: usize) -> bool {
        self.current.index() == index
    }

    /// Connector after dot `index` is filled once the reader has passed it.
    pub fn connector_filled(&self, index: usize) -> bool {
        index < self.current.index()
    }
}
