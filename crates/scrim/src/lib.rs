#![forbid(unsafe_code)]

//! Overlay state and focus-trap management for embeddable UI surfaces.
//!
//! `scrim` owns the piece of overlay behavior that actually has invariants:
//! which overlays (navigation drawer, modal) are open, where keyboard focus
//! is allowed to go while one is up, where focus returns when it closes, and
//! when the underlying page may scroll again. Everything visual — markup,
//! styling, animation — stays with the embedder; `scrim` only sees opaque
//! [`NodeId`]s through the [`Host`] seam.
//!
//! # Invariants
//!
//! - The scroll lock is engaged iff at least one overlay is open, no matter
//!   how overlay lifecycles interleave.
//! - At most one focus trap is active: the top of the overlay stack.
//! - Opening records the focused element; closing the top overlay restores
//!   it when it is still attached.
//! - Escape and an explicit close are equivalent: identical final state.
//!
//! # Failure Modes
//!
//! Every failure is soft. Detached roots, traps with no focusable content,
//! and dead restore targets all degrade to no-ops — a UI enhancement layer
//! must never take the page down with it.
//!
//! # Example
//!
//! ```
//! use scrim::{Host, OverlayKind, OverlayManager, KeyCode, KeyEvent};
//! use scrim_core::MemoryHost;
//!
//! let mut host = MemoryHost::new();
//! let page = host.container(None);
//! let burger = host.focusable(page);
//! let panel = host.container(Some(page));
//! let close_btn = host.focusable(panel);
//! let link = host.focusable(panel);
//!
//! let mut overlays = OverlayManager::new();
//! host.set_focus(burger);
//!
//! overlays.open(&mut host, OverlayKind::Drawer, panel, Some(close_btn));
//! assert!(host.scroll_locked());
//!
//! // Tab from the last focusable wraps to the first.
//! host.set_focus(link);
//! assert!(overlays.handle_key(&mut host, &KeyEvent::press(KeyCode::Tab)));
//!
//! // Escape closes the drawer and puts focus back on the trigger.
//! overlays.handle_key(&mut host, &KeyEvent::press(KeyCode::Escape));
//! assert!(!host.scroll_locked());
//! ```

pub mod manager;
pub mod popover;
pub mod stack;
pub mod trap;

pub use manager::OverlayManager;
pub use popover::PopoverSet;
pub use stack::{OverlayEntry, OverlayKind, OverlayStack};
pub use trap::{TrapWrap, rendered_focusables, wrap_decision};

pub use scrim_core::{Host, KeyCode, KeyEvent, KeyEventKind, Modifiers, NodeId};
