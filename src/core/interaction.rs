//! Interaction state for the landing page
//!
//! The page carries exactly two pieces of client-side state:
//! - [`NavMenu`]: whether the mobile navigation overlay is visible
//! - [`DemoModal`]: whether the demo video modal is open
//!
//! Both start closed and are only changed through the methods below, so the
//! components never flip raw booleans themselves.

/// Mobile navigation menu visibility
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip between visible and hidden (the hamburger / close button)
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Selecting a link or the call-to-action inside the overlay hides it
    pub fn select_item(&mut self) {
        self.open = false;
    }
}

/// Where a pointer interaction inside the modal overlay landed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed area around the dialog
    Backdrop,
    /// The dialog body (video, close button frame)
    Content,
}

/// Demo video modal state machine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DemoModal {
    #[default]
    Closed,
    Open,
}

impl DemoModal {
    pub fn is_open(&self) -> bool {
        matches!(self, DemoModal::Open)
    }

    /// "Lihat Demo" activation
    pub fn open(&mut self) {
        *self = DemoModal::Open;
    }

    /// Close button or Escape key
    pub fn close(&mut self) {
        *self = DemoModal::Closed;
    }

    /// Pointer interaction that reached the overlay.
    ///
    /// Only clicks that target the backdrop itself dismiss the modal; clicks
    /// on the dialog content leave it open.
    pub fn pointer(&mut self, target: PointerTarget) {
        if target == PointerTarget::Backdrop {
            self.close();
        }
    }
}
