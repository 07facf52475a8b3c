#![forbid(unsafe_code)]

//! Focus-trap computation.
//!
//! Pure helpers behind [`OverlayManager::handle_tab`](crate::OverlayManager::handle_tab):
//! which elements a trap cycles over, and whether a given Tab press wraps.
//!
//! The wrap policy trusts the host's native tab order for the interior of
//! the trap and only intervenes at the edges: Shift+Tab on the first element
//! wraps to the last, Tab on the last wraps to the first. A focus position
//! outside the list (or no focus at all) passes through untouched.

use scrim_core::{Host, NodeId};

/// What a Tab press inside a trap should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapWrap {
    /// Wrap focus to the first element and consume the event.
    ToFirst,
    /// Wrap focus to the last element and consume the event.
    ToLast,
    /// Leave the event to the host's default tab handling.
    PassThrough,
}

/// Focusable descendants of `root` that are actually rendered, in traversal
/// order. This is the list a trap cycles over; `display:none`-style subtrees
/// drop out here.
pub fn rendered_focusables<H: Host>(host: &H, root: NodeId) -> Vec<NodeId> {
    host.focusable_descendants(root)
        .into_iter()
        .filter(|&n| host.is_rendered(n))
        .collect()
}

/// Decide whether a Tab press wraps, given the trap's ordered element list,
/// the currently focused element, and whether Shift is held.
#[must_use]
pub fn wrap_decision(ordered: &[NodeId], active: Option<NodeId>, shift: bool) -> TrapWrap {
    let (Some(&first), Some(&last)) = (ordered.first(), ordered.last()) else {
        return TrapWrap::PassThrough;
    };
    match active {
        Some(at) if shift && at == first => TrapWrap::ToLast,
        Some(at) if !shift && at == last => TrapWrap::ToFirst,
        _ => TrapWrap::PassThrough,
    }
}
