#![forbid(unsafe_code)]

//! In-memory reference host.
//!
//! [`MemoryHost`] is a tiny element tree good enough to exercise overlay
//! behavior in tests: nodes have a parent, a `focusable` flag, and a
//! `rendered` flag; the host tracks the active focus, the scroll-lock
//! marker, and a history of every successful focus move for assertions.
//!
//! Document order is insertion order, which matches depth-first order when
//! trees are built top-down (as test fixtures are).

use ahash::AHashMap;

use crate::host::Host;
use crate::node::NodeId;

#[derive(Debug, Clone)]
struct NodeRecord {
    parent: Option<NodeId>,
    focusable: bool,
    rendered: bool,
    attached: bool,
}

/// In-memory element tree implementing [`Host`].
#[derive(Debug, Default)]
pub struct MemoryHost {
    nodes: AHashMap<NodeId, NodeRecord>,
    order: Vec<NodeId>,
    active: Option<NodeId>,
    scroll_locked: bool,
    focus_history: Vec<NodeId>,
    next_id: u64,
}

impl MemoryHost {
    /// Create an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, parent: Option<NodeId>, focusable: bool) -> NodeId {
        self.next_id += 1;
        let id = NodeId::new(self.next_id);
        self.nodes.insert(
            id,
            NodeRecord {
                parent,
                focusable,
                rendered: true,
                attached: true,
            },
        );
        self.order.push(id);
        id
    }

    /// Add a non-focusable container element. `parent = None` makes a root.
    pub fn container(&mut self, parent: Option<NodeId>) -> NodeId {
        self.insert(parent, false)
    }

    /// Add a focusable element under `parent`.
    pub fn focusable(&mut self, parent: NodeId) -> NodeId {
        self.insert(Some(parent), true)
    }

    /// Toggle an element's own rendered flag. Descendants of an unrendered
    /// element are unrendered too (the `display:none` subtree rule).
    pub fn set_rendered(&mut self, node: NodeId, rendered: bool) {
        if let Some(rec) = self.nodes.get_mut(&node) {
            rec.rendered = rendered;
        }
    }

    /// Detach an element and its whole subtree from the tree. If the active
    /// focus was inside the subtree it is cleared.
    pub fn detach(&mut self, node: NodeId) {
        let victims: Vec<NodeId> = self
            .order
            .iter()
            .copied()
            .filter(|&n| n == node || self.has_ancestor(n, node))
            .collect();
        for victim in victims {
            if let Some(rec) = self.nodes.get_mut(&victim) {
                rec.attached = false;
            }
            if self.active == Some(victim) {
                self.active = None;
            }
        }
    }

    /// Whether the scroll-lock marker is currently engaged.
    #[inline]
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Every successful focus move, in order.
    #[must_use]
    pub fn focus_history(&self) -> &[NodeId] {
        &self.focus_history
    }

    fn has_ancestor(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = self.nodes.get(&node).and_then(|rec| rec.parent);
        while let Some(parent) = cursor {
            if parent == ancestor {
                return true;
            }
            cursor = self.nodes.get(&parent).and_then(|rec| rec.parent);
        }
        false
    }

    fn attached(&self, node: NodeId) -> bool {
        self.nodes.get(&node).is_some_and(|rec| rec.attached)
    }
}

impl Host for MemoryHost {
    fn active_focus(&self) -> Option<NodeId> {
        self.active.filter(|&n| self.attached(n))
    }

    fn is_attached(&self, node: NodeId) -> bool {
        self.attached(node)
    }

    fn is_rendered(&self, node: NodeId) -> bool {
        if !self.attached(node) {
            return false;
        }
        let mut cursor = Some(node);
        while let Some(n) = cursor {
            match self.nodes.get(&n) {
                Some(rec) if rec.rendered => cursor = rec.parent,
                _ => return false,
            }
        }
        true
    }

    fn focusable_descendants(&self, root: NodeId) -> Vec<NodeId> {
        self.order
            .iter()
            .copied()
            .filter(|&n| {
                n != root
                    && self
                        .nodes
                        .get(&n)
                        .is_some_and(|rec| rec.attached && rec.focusable)
                    && self.has_ancestor(n, root)
            })
            .collect()
    }

    fn set_focus(&mut self, node: NodeId) -> bool {
        let ok = self
            .nodes
            .get(&node)
            .is_some_and(|rec| rec.attached && rec.focusable)
            && self.is_rendered(node);
        if ok {
            self.active = Some(node);
            self.focus_history.push(node);
        }
        ok
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}
