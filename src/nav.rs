//! Mobile navigation panel and its toggle icon.
//!
//! Open/closed is the presence of `active` on the panel. The toggle icon
//! carries exactly one glyph class matching that state, re-synced after every
//! transition so the two can never disagree.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{ICON_CLOSED_CLASS, ICON_OPEN_CLASS, NAV_OPEN_CLASS};
use crate::surface::{ClassList, InlineStyle};

/// Glyph shown on the mobile toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Xmark,
}

impl MenuIcon {
    #[must_use]
    pub fn for_open(open: bool) -> Self {
        if open { Self::Xmark } else { Self::Bars }
    }

    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Bars => ICON_CLOSED_CLASS,
            Self::Xmark => ICON_OPEN_CLASS,
        }
    }
}

/// Whether a link selection at `viewport_width` should close the menu.
#[must_use]
pub fn closes_on_link(viewport_width: f64, breakpoint_px: f64) -> bool {
    viewport_width <= breakpoint_px
}

pub struct NavController<N> {
    panel: N,
    icon: Option<N>,
    theme_button: Option<N>,
    breakpoint_px: f64,
}

impl<N: ClassList + InlineStyle> NavController<N> {
    /// Wrap the panel and sync the icon to its current state.
    pub fn new(panel: N, icon: Option<N>, theme_button: Option<N>, breakpoint_px: f64) -> Self {
        let mut nav = Self { panel, icon, theme_button, breakpoint_px };
        let open = nav.is_open();
        nav.sync_icon(open);
        nav
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel.has_class(NAV_OPEN_CLASS)
    }

    /// Flip the panel and return whether it is now open.
    pub fn toggle(&mut self) -> bool {
        let open = self.panel.toggle_class(NAV_OPEN_CLASS);
        self.sync_icon(open);
        if open {
            if let Some(button) = self.theme_button.as_mut() {
                button.set_style("display", "block");
            }
        }
        open
    }

    /// Close the panel after a link is chosen on a narrow viewport.
    ///
    /// Returns whether the close rule applied. Wide viewports keep the panel
    /// as-is since it is always visible there.
    pub fn on_link_selected(&mut self, viewport_width: f64) -> bool {
        if !closes_on_link(viewport_width, self.breakpoint_px) {
            return false;
        }
        self.panel.remove_class(NAV_OPEN_CLASS);
        self.sync_icon(false);
        true
    }

    #[must_use]
    pub fn panel(&self) -> &N {
        &self.panel
    }

    #[must_use]
    pub fn icon(&self) -> Option<&N> {
        self.icon.as_ref()
    }

    #[must_use]
    pub fn theme_button(&self) -> Option<&N> {
        self.theme_button.as_ref()
    }

    fn sync_icon(&mut self, open: bool) {
        let Some(icon) = self.icon.as_mut() else {
            return;
        };
        let glyph = MenuIcon::for_open(open);
        icon.remove_class(MenuIcon::for_open(!open).class_name());
        icon.add_class(glyph.class_name());
    }
}
