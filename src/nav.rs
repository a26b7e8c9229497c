//! Navigation bar state: scrolled look, mobile menu, active section.
//!
//! The active section is derived from the scroll offset on every scroll and
//! never stored independently of it. When the offset falls outside every
//! section the previous highlight is kept.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{ACTIVE_LOOKAHEAD_PX, SCROLLED_THRESHOLD_PX};

/// Vertical extent of one `section[id]`, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Which way a menu transition went, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChange {
    Opened,
    Closed,
    Unchanged,
}

/// What a scroll event changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollUpdate {
    /// New scrolled flag when it flipped.
    pub scrolled: Option<bool>,
    /// Newly active section id when the highlight moved.
    pub active: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavMetrics {
    pub scrolled_threshold: f64,
    pub lookahead: f64,
}

impl Default for NavMetrics {
    fn default() -> Self {
        Self { scrolled_threshold: SCROLLED_THRESHOLD_PX, lookahead: ACTIVE_LOOKAHEAD_PX }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
    pub active: Option<String>,
    metrics: NavMetrics,
}

/// Whether the navbar should show its scrolled look at `offset`.
#[must_use]
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset >= threshold
}

/// First section, in document order, containing `offset + lookahead`.
#[must_use]
pub fn active_section(offset: f64, lookahead: f64, sections: &[SectionBounds]) -> Option<&SectionBounds> {
    let probe = offset + lookahead;
    sections.iter().find(|s| s.contains(probe))
}

/// The fragment href a nav link must carry to match `section_id`.
#[must_use]
pub fn link_href(section_id: &str) -> String {
    format!("#{section_id}")
}

impl NavState {
    #[must_use]
    pub fn new(metrics: NavMetrics) -> Self {
        Self { metrics, ..Self::default() }
    }

    /// Recompute the scrolled flag and the active section.
    pub fn on_scroll(&mut self, offset: f64, sections: &[SectionBounds]) -> ScrollUpdate {
        let mut update = ScrollUpdate::default();

        let scrolled = is_scrolled(offset, self.metrics.scrolled_threshold);
        if scrolled != self.scrolled {
            self.scrolled = scrolled;
            update.scrolled = Some(scrolled);
        }

        if let Some(section) = active_section(offset, self.metrics.lookahead, sections) {
            if self.active.as_deref() != Some(section.id.as_str()) {
                self.active = Some(section.id.clone());
                update.active = Some(section.id.clone());
            }
        }
        update
    }

    pub fn toggle_menu(&mut self) -> MenuChange {
        if self.menu_open { self.close_menu() } else { self.open_menu() }
    }

    pub fn open_menu(&mut self) -> MenuChange {
        if self.menu_open {
            return MenuChange::Unchanged;
        }
        self.menu_open = true;
        MenuChange::Opened
    }

    pub fn close_menu(&mut self) -> MenuChange {
        if !self.menu_open {
            return MenuChange::Unchanged;
        }
        self.menu_open = false;
        MenuChange::Closed
    }

    /// Escape closes the menu; other keys are ignored.
    pub fn on_key(&mut self, key: &str) -> MenuChange {
        if key == "Escape" { self.close_menu() } else { MenuChange::Unchanged }
    }

    /// Clicks outside the navbar close the menu.
    pub fn on_document_click(&mut self, inside_navbar: bool) -> MenuChange {
        if inside_navbar { MenuChange::Unchanged } else { self.close_menu() }
    }
}
