//! Node storage and the per-node link operations

use crate::error::Result;
use crate::graph::handle::{LinkHandle, NodeHandle};
use crate::graph::link::{Link, LinkRecord, Metric};
use crate::graph::store::GraphStore;

/// A node owned by a store: its payload and its ordered outgoing links.
///
/// Link order is significant. It is the order the path search tries
/// branches in, so it decides which of several equal-cost paths wins.
#[derive(Debug, Clone)]
pub struct NodeRecord<T> {
    value: T,
    links: Vec<LinkRecord>,
    next_serial: u32,
}

impl<T> NodeRecord<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            links: Vec::new(),
            next_serial: 0,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    /// Append a link; duplicates of an existing destination are allowed
    pub(crate) fn push_link(&mut self, next: NodeHandle, metric: Metric) -> u32 {
        let serial = self.next_serial;
        self.next_serial = self.next_serial.wrapping_add(1);
        self.links.push(LinkRecord::new(serial, next, metric));
        serial
    }

    /// First link (in stored order) pointing at `destination`
    pub(crate) fn first_link_to(&self, destination: NodeHandle) -> Option<&LinkRecord> {
        self.links
            .iter()
            .find(|link| link.destination() == destination)
    }

    pub(crate) fn link_by_serial(&self, serial: u32) -> Option<&LinkRecord> {
        self.links.iter().find(|link| link.serial() == serial)
    }

    /// Drop every link pointing at `destination`, returning how many went
    pub(crate) fn drop_links_to(&mut self, destination: NodeHandle) -> usize {
        let before = self.links.len();
        self.links.retain(|link| link.destination() != destination);
        before - self.links.len()
    }
}

/// Shared borrow of a live node
pub struct NodeRef<'a, T> {
    handle: NodeHandle,
    record: &'a NodeRecord<T>,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(handle: NodeHandle, record: &'a NodeRecord<T>) -> Self {
        Self { handle, record }
    }

    pub fn handle(&self) -> NodeHandle {
        self.handle
    }

    pub fn value(&self) -> &'a T {
        self.record.value()
    }

    /// Outgoing links in stored order
    pub fn links(&self) -> impl Iterator<Item = Link> + 'a {
        let handle = self.handle;
        self.record.links().iter().map(move |link| link.view(handle))
    }

    pub fn link_count(&self) -> usize {
        self.record.links().len()
    }

    /// First outgoing link to `destination`, if any
    pub fn get_link_to(&self, destination: NodeHandle) -> Option<Link> {
        self.record
            .first_link_to(destination)
            .map(|link| link.view(self.handle))
    }
}

/// Exclusive borrow of a live node.
///
/// Holds the whole store so that `connect_to` can check that the
/// destination is owned by the same store.
pub struct NodeMut<'a, T> {
    handle: NodeHandle,
    store: &'a mut GraphStore<T>,
}

impl<'a, T> NodeMut<'a, T> {
    pub(crate) fn new(handle: NodeHandle, store: &'a mut GraphStore<T>) -> Self {
        Self { handle, store }
    }

    pub fn handle(&self) -> NodeHandle {
        self.handle
    }

    pub fn value(&self) -> &T {
        self.record().value()
    }

    pub fn value_mut(&mut self) -> &mut T {
        self.store
            .value_mut(self.handle)
            .expect("NodeMut always borrows a live node")
    }

    /// Create a link to `destination` with the given metric
    pub fn connect_to(&mut self, destination: NodeHandle, metric: Metric) -> Result<LinkHandle> {
        self.store.connect(self.handle, destination, metric)
    }

    /// First outgoing link to `destination`, if any
    pub fn get_link_to(&self, destination: NodeHandle) -> Option<Link> {
        self.store.get_link(self.handle, destination)
    }

    /// Remove every outgoing link to `destination`.
    /// Returns true if at least one link was removed.
    pub fn unconnect_to(&mut self, destination: NodeHandle) -> bool {
        self.store.unconnect(self.handle, destination)
    }

    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let handle = self.handle;
        self.record()
            .links()
            .iter()
            .map(move |link| link.view(handle))
    }

    pub fn link_count(&self) -> usize {
        self.record().links().len()
    }

    fn record(&self) -> &NodeRecord<T> {
        self.store
            .record(self.handle)
            .expect("NodeMut always borrows a live node")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::handle::StoreId;

    fn handle(index: usize) -> NodeHandle {
        NodeHandle::new(StoreId::next(), index, 0)
    }

    #[test]
    fn test_push_link_assigns_increasing_serials() {
        let target = handle(1);
        let mut node = NodeRecord::new("a");
        assert_eq!(node.push_link(target, 3), 0);
        assert_eq!(node.push_link(target, 4), 1);
        assert_eq!(node.links().len(), 2);
    }

    #[test]
    fn test_first_link_to_respects_order() {
        let target = handle(1);
        let mut node = NodeRecord::new(0u8);
        node.push_link(target, 9);
        node.push_link(target, 1);

        let link = node.first_link_to(target).unwrap();
        assert_eq!(link.metric(), 9);
        assert_eq!(link.serial(), 0);
    }

    #[test]
    fn test_drop_links_to_removes_all_duplicates() {
        let a = handle(1);
        let b = handle(2);
        let mut node = NodeRecord::new(());
        node.push_link(a, 1);
        node.push_link(b, 2);
        node.push_link(a, 3);

        assert_eq!(node.drop_links_to(a), 2);
        assert_eq!(node.links().len(), 1);
        assert_eq!(node.links()[0].destination(), b);
        assert_eq!(node.drop_links_to(a), 0);
    }

    #[test]
    fn test_serials_are_not_reused_after_removal() {
        let a = handle(1);
        let mut node = NodeRecord::new(());
        node.push_link(a, 1);
        node.drop_links_to(a);
        assert_eq!(node.push_link(a, 1), 1);
        assert!(node.link_by_serial(0).is_none());
        assert!(node.link_by_serial(1).is_some());
    }
}
