//! Stable handles into a [`GraphStore`](super::GraphStore)
//!
//! A node handle names a slot in the store's arena together with the
//! generation the slot had when the node was created. Removing the node
//! bumps the generation, so an outstanding handle stops resolving instead
//! of aliasing whatever node later reuses the slot.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoreId(u64);

impl StoreId {
    pub(crate) fn next() -> Self {
        StoreId(NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Opaque reference to a node owned by one store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    store: StoreId,
    index: usize,
    generation: u32,
}

impl NodeHandle {
    pub(crate) fn new(store: StoreId, index: usize, generation: u32) -> Self {
        Self {
            store,
            index,
            generation,
        }
    }

    pub(crate) fn store(&self) -> StoreId {
        self.store
    }

    /// Identity of the store that minted this handle
    pub fn store_id(&self) -> u64 {
        self.store.value()
    }

    /// Arena slot of the node
    pub fn index(&self) -> usize {
        self.index
    }

    /// Generation of the slot when the node was created
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}g{}@{}", self.index, self.generation, self.store.0)
    }
}

/// Opaque reference to an outgoing link of a node.
///
/// Serials are unique per source node and never reused, so a handle to an
/// unconnected link simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkHandle {
    source: NodeHandle,
    serial: u32,
}

impl LinkHandle {
    pub(crate) fn new(source: NodeHandle, serial: u32) -> Self {
        Self { source, serial }
    }

    /// Node owning the link
    pub fn source(&self) -> NodeHandle {
        self.source
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }
}

impl fmt::Display for LinkHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.source, self.serial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_ids_are_unique() {
        let a = StoreId::next();
        let b = StoreId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generation_distinguishes_handles() {
        let store = StoreId::next();
        let old = NodeHandle::new(store, 3, 0);
        let new = NodeHandle::new(store, 3, 1);
        assert_ne!(old, new);
        assert_eq!(old.index(), new.index());
    }

    #[test]
    fn test_display() {
        let store = StoreId::next();
        let node = NodeHandle::new(store, 2, 5);
        let link = LinkHandle::new(node, 7);
        assert_eq!(node.to_string(), format!("n2g5@{}", store.value()));
        assert_eq!(link.to_string(), format!("n2g5@{}#7", store.value()));
        assert_eq!(link.source(), node);
    }
}
