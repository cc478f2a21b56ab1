//! Local navbar state and its transitions.
//!
//! `NavState` is owned by exactly one mounted `Navbar`. Components never flip
//! the fields directly; they go through the named transitions below so the
//! whole behavior can be exercised without a renderer.

use serde::{Deserialize, Serialize};

use super::site::BREAKPOINT_PX;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    /// Collapsed mobile menu is expanded.
    pub menu_open: bool,
    /// Demo request dialog is visible.
    pub modal_open: bool,
    /// Page has been scrolled away from the top.
    pub scrolled: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hamburger button.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Both "Request Demo" buttons and the dialog's own close action.
    pub fn toggle_modal(&mut self) {
        self.modal_open = !self.modal_open;
    }

    /// Records the latest vertical scroll offset.
    pub fn set_scrolled(&mut self, offset_y: f64) {
        self.scrolled = offset_y > 0.0;
    }

    /// Collapses the mobile menu once the viewport reaches the desktop breakpoint.
    /// Narrower widths leave the menu as it is.
    pub fn apply_viewport_width(&mut self, width: f64) {
        if is_desktop_width(width) {
            self.menu_open = false;
        }
    }
}

pub fn is_desktop_width(width: f64) -> bool {
    width >= BREAKPOINT_PX
}
