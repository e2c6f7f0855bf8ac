//! Local UI chrome state (active section, mobile menu, scroll style).
//!
//! DESIGN
//! ======
//! Handlers mutate plain fields and never touch the DOM. Smooth scrolling
//! is requested through `scroll_request_seq`/`scroll_target`, which the
//! page consumes in an effect, so navigation stays testable natively.

use std::fmt;

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

/// Vertical offset (px) past which the nav bar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Page regions reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the `<section>` element for this region.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Button text shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// UI state for the portfolio page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortfolioState {
    pub active_section: Section,
    pub menu_open: bool,
    pub scrolled: bool,
    /// Bumped on every navigation so repeated requests for the same
    /// section still scroll.
    pub scroll_request_seq: u64,
    pub scroll_target: Option<Section>,
}

impl PortfolioState {
    /// Highlight `section`, close the mobile menu, and request a scroll to it.
    pub fn navigate(&mut self, section: Section) {
        self.active_section = section;
        self.menu_open = false;
        self.scroll_target = Some(section);
        self.scroll_request_seq = self.scroll_request_seq.wrapping_add(1);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Recompute the scrolled flag from the window's vertical offset.
    ///
    /// Returns `true` when the flag changed.
    pub fn record_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}
