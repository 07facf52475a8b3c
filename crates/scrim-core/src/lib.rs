#![forbid(unsafe_code)]

//! Platform-independent primitives for the scrim overlay manager.
//!
//! This crate defines the vocabulary shared between an embedding UI and the
//! overlay manager in the `scrim` crate:
//!
//! - [`NodeId`]: opaque identity for host elements.
//! - [`event`]: a minimal keyboard event model (`Tab` and `Escape` are the
//!   only keys the manager acts on; the rest exist so embedders can route
//!   their full event stream through without pre-filtering).
//! - [`Host`]: the seam abstracting the environment — querying the focused
//!   element, focusable descendants and their rendered-visibility, moving
//!   focus, and toggling the page scroll-lock marker.
//!
//! With the `test-helpers` feature, [`MemoryHost`] provides an in-memory
//! reference host so downstream code can test overlay behavior without a
//! real UI tree.

pub mod event;
pub mod host;
#[cfg(any(test, feature = "test-helpers"))]
pub mod memory;
pub mod node;

pub use event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use host::Host;
#[cfg(any(test, feature = "test-helpers"))]
pub use memory::MemoryHost;
pub use node::NodeId;
