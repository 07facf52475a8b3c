#![forbid(unsafe_code)]

//! The overlay manager.
//!
//! [`OverlayManager`] owns the overlay stack and the popover slot, and turns
//! caller-delivered input (open/close requests, Tab, Escape) into focus and
//! scroll-lock effects on a [`Host`]. It is a plain value: no global state,
//! no listener registration — the embedder wires its own event sources and
//! calls in.
//!
//! # Invariants
//!
//! - Scroll lock is engaged iff the overlay stack is non-empty.
//! - The top stack entry is the only active focus trap.
//! - `close` acts only on kinds that are actually open, so a spurious close
//!   can never steal focus from unrelated UI.
//!
//! # Failure Modes
//!
//! Everything degrades to a no-op: opening with a detached root, closing a
//! kind that is not open, trapping in a subtree with no rendered focusables,
//! restoring to a focus target that has since left the tree.

use scrim_core::{Host, KeyCode, KeyEvent, NodeId};

use crate::popover::PopoverSet;
use crate::stack::{OverlayEntry, OverlayKind, OverlayStack};
use crate::trap::{self, TrapWrap};

/// Overlay lifecycle, focus trapping, and scroll-lock coordination.
#[derive(Debug, Default)]
pub struct OverlayManager {
    stack: OverlayStack,
    popovers: PopoverSet,
}

impl OverlayManager {
    /// Create a manager with nothing open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    /// Whether an overlay of this kind is open.
    #[must_use]
    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.stack.contains(kind)
    }

    /// Whether any overlay is open.
    #[must_use]
    pub fn any_open(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Number of open overlays.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Root of the active focus trap: the top overlay's subtree.
    #[must_use]
    pub fn trap_root(&self) -> Option<NodeId> {
        self.stack.top().map(|e| e.trap_root)
    }

    /// Transient popover state.
    #[must_use]
    pub fn popovers(&self) -> &PopoverSet {
        &self.popovers
    }

    /// Mutable popover state, for wiring popover trigger events.
    pub fn popovers_mut(&mut self) -> &mut PopoverSet {
        &mut self.popovers
    }

    // --- Lifecycle ---

    /// Open an overlay.
    ///
    /// Records the currently focused element for restoration, pushes the
    /// overlay onto the stack, engages the scroll lock, and moves focus into
    /// the trap: to `initial_focus` when it is a rendered focusable
    /// descendant of `root`, otherwise to the first rendered focusable
    /// descendant, otherwise nowhere.
    ///
    /// No-op when `root` is not attached or when this kind is already open.
    pub fn open<H: Host>(
        &mut self,
        host: &mut H,
        kind: OverlayKind,
        root: NodeId,
        initial_focus: Option<NodeId>,
    ) {
        if !host.is_attached(root) || self.stack.contains(kind) {
            return;
        }

        let prior_focus = host.active_focus();
        self.stack.push(OverlayEntry {
            kind,
            trap_root: root,
            prior_focus,
        });
        host.set_scroll_lock(true);

        let focusables = trap::rendered_focusables(host, root);
        let target = initial_focus
            .filter(|t| focusables.contains(t))
            .or_else(|| focusables.first().copied());
        if let Some(target) = target {
            let _ = host.set_focus(target);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(%kind, %root, depth = self.stack.depth(), "overlay opened");
    }

    /// Close an overlay.
    ///
    /// Removes the entry from wherever it sits in the stack. Releases the
    /// scroll lock only when no overlay remains. When the closed entry was
    /// the top, its recorded prior focus is restored if still attached, and
    /// the next-lower overlay's trap becomes active again. Closing a kind
    /// that is not open is a no-op.
    pub fn close<H: Host>(&mut self, host: &mut H, kind: OverlayKind) {
        let was_top = self.stack.top().map(|e| e.kind) == Some(kind);
        let Some(entry) = self.stack.remove(kind) else {
            return;
        };

        if self.stack.is_empty() {
            host.set_scroll_lock(false);
        }

        if was_top
            && let Some(prior) = entry.prior_focus
            && host.is_attached(prior)
        {
            let _ = host.set_focus(prior);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(%kind, was_top, depth = self.stack.depth(), "overlay closed");
    }

    // --- Input events ---

    /// Route a keyboard event: Escape presses to [`Self::handle_escape`],
    /// Tab presses to [`Self::handle_tab`]. Returns whether the event was
    /// consumed; the caller maps `true` to suppressing the host's default
    /// handling.
    pub fn handle_key<H: Host>(&mut self, host: &mut H, event: &KeyEvent) -> bool {
        if !event.is_press() {
            return false;
        }
        match event.code {
            KeyCode::Escape => self.handle_escape(host),
            KeyCode::Tab => self.handle_tab(host, event),
            _ => false,
        }
    }

    /// Constrain a Tab press to the active trap.
    ///
    /// Only edge positions are touched: Shift+Tab on the trap's first
    /// rendered focusable wraps to the last, Tab on the last wraps to the
    /// first. Everything else — interior positions, focus outside the trap,
    /// a trap with no focusable content, no trap at all — returns `false`
    /// and leaves the event to the host's default tab order.
    pub fn handle_tab<H: Host>(&mut self, host: &mut H, event: &KeyEvent) -> bool {
        if event.code != KeyCode::Tab || !event.is_press() {
            return false;
        }
        let Some(root) = self.trap_root() else {
            return false;
        };

        let ordered = trap::rendered_focusables(host, root);
        match trap::wrap_decision(&ordered, host.active_focus(), event.shift()) {
            TrapWrap::ToFirst => {
                if let Some(&first) = ordered.first() {
                    let _ = host.set_focus(first);
                }
                true
            }
            TrapWrap::ToLast => {
                if let Some(&last) = ordered.last() {
                    let _ = host.set_focus(last);
                }
                true
            }
            TrapWrap::PassThrough => false,
        }
    }

    /// The global escape hatch.
    ///
    /// Dismisses any open popover unconditionally, then closes the topmost
    /// overlay if one is open (one layer per press; the next-lower overlay's
    /// trap and the scroll lock survive until it too is closed). Returns
    /// whether anything was dismissed.
    pub fn handle_escape<H: Host>(&mut self, host: &mut H) -> bool {
        let popover_dismissed = self.popovers.close_all();

        let Some(top_kind) = self.stack.top().map(|e| e.kind) else {
            return popover_dismissed;
        };
        self.close(host, top_kind);

        #[cfg(feature = "tracing")]
        tracing::debug!(kind = %top_kind, "overlay dismissed via escape");

        true
    }
}
