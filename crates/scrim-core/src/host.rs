#![forbid(unsafe_code)]

//! The platform seam.
//!
//! The overlay manager never touches a UI tree directly; everything it needs
//! from its environment goes through [`Host`]. A browser embedding maps
//! these onto `document.activeElement`, focusable-element queries, layout
//! checks, and a scroll-lock class on the page root; a retained-mode UI maps
//! them onto its own node store.
//!
//! # Invariants
//!
//! - `focusable_descendants` returns elements in traversal (tab) order and
//!   excludes the root itself. It must NOT pre-filter by visibility: the
//!   manager applies `is_rendered` so the filtering policy stays in one
//!   place.
//! - `set_scroll_lock` is idempotent; hosts must tolerate redundant calls
//!   with the current value.
//!
//! # Failure Modes
//!
//! All queries about missing elements answer negatively (`None`, `false`,
//! empty vec) instead of panicking; `set_focus` on a missing or unfocusable
//! element returns `false` and changes nothing. The manager relies on this
//! to keep every failure path a soft no-op.

use crate::node::NodeId;

/// Environment abstraction consumed by the overlay manager.
pub trait Host {
    /// The element that currently has keyboard focus, if any.
    fn active_focus(&self) -> Option<NodeId>;

    /// Whether the element is still part of the live tree.
    fn is_attached(&self, node: NodeId) -> bool;

    /// Whether the element has a layout box (is actually rendered, not
    /// merely present in markup).
    fn is_rendered(&self, node: NodeId) -> bool;

    /// Focusable descendants of `root` in traversal order, unfiltered by
    /// visibility. The root itself is never included.
    fn focusable_descendants(&self, root: NodeId) -> Vec<NodeId>;

    /// Move keyboard focus to `node`. Returns `false` (and does nothing)
    /// when the element is missing or not focusable.
    fn set_focus(&mut self, node: NodeId) -> bool;

    /// Engage or release the page scroll-lock marker. Idempotent.
    fn set_scroll_lock(&mut self, locked: bool);
}
