#![forbid(unsafe_code)]

//! Transient popover tracking.
//!
//! Popovers (language menus and the like) are lighter than overlays: they
//! never trap focus, never touch the scroll lock, and at most one is open at
//! a time — opening one dismisses whatever else was up. Escape dismisses
//! them unconditionally, before and independent of any overlay handling.

use scrim_core::NodeId;

/// Tracks which transient popover, if any, is open.
#[derive(Debug, Default)]
pub struct PopoverSet {
    open: Option<NodeId>,
}

impl PopoverSet {
    /// Create with nothing open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The open popover, if any.
    #[inline]
    #[must_use]
    pub fn open(&self) -> Option<NodeId> {
        self.open
    }

    /// Whether this specific popover is open.
    #[must_use]
    pub fn is_open(&self, id: NodeId) -> bool {
        self.open == Some(id)
    }

    /// Toggle a popover: opening it closes any other. Returns the popover's
    /// new open state.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if self.open == Some(id) {
            self.open = None;
            false
        } else {
            self.open = Some(id);
            true
        }
    }

    /// Close whatever is open. Returns `true` if something was dismissed.
    pub fn close_all(&mut self) -> bool {
        self.open.take().is_some()
    }
}
