#![forbid(unsafe_code)]

//! Ordered stack of open overlays.
//!
//! The stack replaces the classic "one boolean per overlay plus one shared
//! trap slot" arrangement, which silently mis-tracks the trap whenever two
//! overlays are open at once (modal over drawer: last-opened wins the slot,
//! and closing either clears it for both). Here every open overlay carries
//! its own trap root and restore target, and the top entry is the one and
//! only active trap.
//!
//! # Invariants
//!
//! - Entries are ordered bottom to top in open order.
//! - At most one entry per [`OverlayKind`].
//! - The top entry owns the active focus trap.
//!
//! # Failure Modes
//!
//! - `pop()` / `remove()` on an absent entry return `None` (no panic).
//! - `push()` of an already-open kind returns `false` and changes nothing.

use core::fmt;

use scrim_core::NodeId;

/// The kinds of overlay the embedding UI can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayKind {
    /// Slide-in navigation drawer.
    Drawer,
    /// Centered modal dialog.
    Modal,
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drawer => f.write_str("drawer"),
            Self::Modal => f.write_str("modal"),
        }
    }
}

/// One open overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayEntry {
    /// Which overlay this is.
    pub kind: OverlayKind,
    /// Subtree that constrains Tab navigation while this entry is on top.
    pub trap_root: NodeId,
    /// Element that had focus immediately before this overlay opened;
    /// restored on close when still attached.
    pub prior_focus: Option<NodeId>,
}

/// Open overlays in open order (bottom to top).
#[derive(Debug, Default)]
pub struct OverlayStack {
    entries: Vec<OverlayEntry>,
}

impl OverlayStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no overlay is open.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of open overlays.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Whether an overlay of this kind is open.
    #[must_use]
    pub fn contains(&self, kind: OverlayKind) -> bool {
        self.entries.iter().any(|e| e.kind == kind)
    }

    /// The topmost entry — the active focus trap, if any.
    #[must_use]
    pub fn top(&self) -> Option<&OverlayEntry> {
        self.entries.last()
    }

    /// Push an entry on top. Returns `false` (and changes nothing) when an
    /// entry of the same kind is already open.
    pub fn push(&mut self, entry: OverlayEntry) -> bool {
        if self.contains(entry.kind) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove the entry of the given kind from wherever it sits.
    pub fn remove(&mut self, kind: OverlayKind) -> Option<OverlayEntry> {
        let idx = self.entries.iter().position(|e| e.kind == kind)?;
        Some(self.entries.remove(idx))
    }

    /// Pop the top entry.
    pub fn pop(&mut self) -> Option<OverlayEntry> {
        self.entries.pop()
    }

    /// Entries bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &OverlayEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: OverlayKind, root: u64) -> OverlayEntry {
        OverlayEntry {
            kind,
            trap_root: NodeId::new(root),
            prior_focus: None,
        }
    }

    #[test]
    fn empty_stack() {
        let stack = OverlayStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.depth(), 0);
        assert!(stack.top().is_none());
    }

    #[test]
    fn push_orders_bottom_to_top() {
        let mut stack = OverlayStack::new();
        assert!(stack.push(entry(OverlayKind::Drawer, 1)));
        assert!(stack.push(entry(OverlayKind::Modal, 2)));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top().map(|e| e.kind), Some(OverlayKind::Modal));
    }

    #[test]
    fn duplicate_kind_rejected() {
        let mut stack = OverlayStack::new();
        assert!(stack.push(entry(OverlayKind::Drawer, 1)));
        assert!(!stack.push(entry(OverlayKind::Drawer, 9)));
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top().map(|e| e.trap_root), Some(NodeId::new(1)));
    }

    #[test]
    fn remove_from_below_top() {
        let mut stack = OverlayStack::new();
        stack.push(entry(OverlayKind::Drawer, 1));
        stack.push(entry(OverlayKind::Modal, 2));

        let removed = stack.remove(OverlayKind::Drawer);
        assert_eq!(removed.map(|e| e.kind), Some(OverlayKind::Drawer));
        // Modal stays on top, untouched.
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top().map(|e| e.kind), Some(OverlayKind::Modal));
    }

    #[test]
    fn remove_absent_kind_is_none() {
        let mut stack = OverlayStack::new();
        stack.push(entry(OverlayKind::Drawer, 1));
        assert!(stack.remove(OverlayKind::Modal).is_none());
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn pop_lifo_order() {
        let mut stack = OverlayStack::new();
        stack.push(entry(OverlayKind::Drawer, 1));
        stack.push(entry(OverlayKind::Modal, 2));

        assert_eq!(stack.pop().map(|e| e.kind), Some(OverlayKind::Modal));
        assert_eq!(stack.pop().map(|e| e.kind), Some(OverlayKind::Drawer));
        assert!(stack.pop().is_none());
    }

    #[test]
    fn iter_walks_bottom_to_top() {
        let mut stack = OverlayStack::new();
        stack.push(entry(OverlayKind::Drawer, 1));
        stack.push(entry(OverlayKind::Modal, 2));

        let kinds: Vec<OverlayKind> = stack.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![OverlayKind::Drawer, OverlayKind::Modal]);
    }

    #[test]
    fn kind_display() {
        assert_eq!(OverlayKind::Drawer.to_string(), "drawer");
        assert_eq!(OverlayKind::Modal.to_string(), "modal");
    }
}
