//! Page-level state owned by the top-level composition.

use crate::ui::catalog::{self, ServiceOffering};

/// `window.scrollY` past which the navbar switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Privacy,
    Terms,
}

impl PolicyKind {
    pub fn title(&self) -> &'static str {
        match self {
            PolicyKind::Privacy => "Privacy Policy",
            PolicyKind::Terms => "Terms of Service",
        }
    }
}

/// The one modal that may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Policy(PolicyKind),
    Service(&'static ServiceOffering),
}

#[derive(Debug, Default)]
pub struct PageState {
    overlay: Option<Overlay>,
    scrolled: bool,
    mobile_menu_open: bool,
}

impl PageState {
    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn open_policy(&mut self, kind: PolicyKind) {
        self.overlay = Some(Overlay::Policy(kind));
    }

    /// Open the detail modal for `key`. Unknown keys leave the page unchanged.
    pub fn open_service(&mut self, key: &str) -> bool {
        match catalog::offering(key) {
            Some(offering) => {
                self.overlay = Some(Overlay::Service(offering));
                true
            }
            None => false,
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn selected_service(&self) -> Option<&'static ServiceOffering> {
        match self.overlay {
            Some(Overlay::Service(offering)) => Some(offering),
            _ => None,
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLL_THRESHOLD;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Following a nav link closes the mobile menu.
    pub fn navigate(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }
}
