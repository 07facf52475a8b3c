#![forbid(unsafe_code)]

//! Opaque node identity.

use core::fmt;

/// Identifies an element owned by a [`Host`](crate::host::Host).
///
/// IDs are minted by the host and treated as opaque by the overlay manager:
/// the manager never derives meaning from the raw value, it only compares
/// and stores it. A host is free to use array indices, interned pointers,
/// or hashes, as long as an id stays stable for the element's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u64);

impl NodeId {
    /// Create a node id from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trip() {
        let id = NodeId::new(42);
        assert_eq!(id.raw(), 42);
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(NodeId::new(7), NodeId::new(7));
        assert_ne!(NodeId::new(7), NodeId::new(8));
    }

    #[test]
    fn display_format() {
        assert_eq!(NodeId::new(3).to_string(), "node#3");
    }
}
