//! The graph container: node ownership, lookup, removal and path queries

use crate::bail_handle;
use crate::config::GraphConfig;
use crate::error::{HandleFault, Result};
use crate::graph::handle::{LinkHandle, NodeHandle, StoreId};
use crate::graph::link::{Link, LinkRecord, Metric};
use crate::graph::node::{NodeMut, NodeRecord, NodeRef};
use crate::graph::path::{FoundPath, PathFinder};
use crate::graph::topology::Topology;

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    node: Option<NodeRecord<T>>,
}

/// In-memory directed weighted graph.
///
/// The store exclusively owns its nodes, and each node owns its outgoing
/// links. Callers hold [`NodeHandle`]s and [`LinkHandle`]s, never
/// references, so removing a node cannot leave anything dangling.
///
/// A store is not synchronised. Mutation takes `&mut self`, so sharing one
/// across threads needs an external lock.
#[derive(Debug)]
pub struct GraphStore<T> {
    id: StoreId,
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    /// Live slot indices in insertion order
    order: Vec<usize>,
    config: GraphConfig,
}

impl<T> Default for GraphStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GraphStore<T> {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Alias of [`GraphStore::new`]
    pub fn create() -> Self {
        Self::new()
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            id: StoreId::next(),
            slots: Vec::new(),
            free: Vec::new(),
            order: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GraphConfig) {
        self.config = config;
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether `node` is currently owned by this store
    pub fn contains(&self, node: NodeHandle) -> bool {
        self.record(node).is_some()
    }

    /// Handles of all live nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.order.iter().map(|&index| self.handle_at(index))
    }

    /// Live nodes with their payloads in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &T)> + '_ {
        self.order.iter().filter_map(|&index| {
            let node = self.slots[index].node.as_ref()?;
            Some((self.handle_at(index), node.value()))
        })
    }

    /// Total number of links held by all nodes
    pub fn link_count(&self) -> usize {
        self.slots
            .iter()
            .filter_map(|slot| slot.node.as_ref())
            .map(|node| node.links().len())
            .sum()
    }

    /// Create a new node holding `value` and return its handle
    pub fn add(&mut self, value: T) -> NodeHandle {
        let record = NodeRecord::new(value);
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index].node = Some(record);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(record),
                });
                self.slots.len() - 1
            }
        };
        self.order.push(index);

        let handle = self.handle_at(index);
        tracing::trace!(node = %handle, "added node");
        handle
    }

    /// Remove `node` and every link pointing at it.
    ///
    /// The node's own outgoing links are released with it. Returns false,
    /// and changes nothing, if `node` is not owned by this store.
    pub fn remove(&mut self, node: NodeHandle) -> bool {
        if self.record(node).is_none() {
            return false;
        }

        let index = node.index();
        let slot = &mut self.slots[index];
        let outgoing = slot.node.take().map_or(0, |record| record.links().len());
        slot.generation = slot.generation.wrapping_add(1);
        // Slots with an exhausted generation are retired
        if slot.generation != u32::MAX {
            self.free.push(index);
        }
        self.order.retain(|&live| live != index);

        let incoming: usize = self
            .slots
            .iter_mut()
            .filter_map(|slot| slot.node.as_mut())
            .map(|record| record.drop_links_to(node))
            .sum();

        tracing::debug!(node = %node, outgoing, incoming, "removed node");
        true
    }

    /// Remove every node. All outstanding handles become stale.
    pub fn clear(&mut self) {
        for index in std::mem::take(&mut self.order) {
            let slot = &mut self.slots[index];
            slot.node = None;
            slot.generation = slot.generation.wrapping_add(1);
            if slot.generation != u32::MAX {
                self.free.push(index);
            }
        }
    }

    pub fn value(&self, node: NodeHandle) -> Option<&T> {
        self.record(node).map(NodeRecord::value)
    }

    pub fn value_mut(&mut self, node: NodeHandle) -> Option<&mut T> {
        self.record_mut(node).map(NodeRecord::value_mut)
    }

    /// Borrow a node for reading
    pub fn node(&self, node: NodeHandle) -> Result<NodeRef<'_, T>> {
        let record = self.resolve(node)?;
        Ok(NodeRef::new(node, record))
    }

    /// Borrow a node for link editing
    pub fn node_mut(&mut self, node: NodeHandle) -> Result<NodeMut<'_, T>> {
        self.resolve(node)?;
        Ok(NodeMut::new(node, self))
    }

    /// Look up a link by handle
    pub fn link(&self, link: LinkHandle) -> Option<Link> {
        let source = link.source();
        self.record(source)?
            .link_by_serial(link.serial())
            .map(|record| record.view(source))
    }

    /// Append a link from `from` to `to`. Both nodes must belong to this store.
    pub fn connect(
        &mut self,
        from: NodeHandle,
        to: NodeHandle,
        metric: Metric,
    ) -> Result<LinkHandle> {
        self.resolve(to)?;
        let serial = self.resolve_mut(from)?.push_link(to, metric);

        let link = LinkHandle::new(from, serial);
        tracing::debug!(link = %link, to = %to, metric, "connected");
        Ok(link)
    }

    /// First link from `from` to `to`, in stored order
    pub fn get_link(&self, from: NodeHandle, to: NodeHandle) -> Option<Link> {
        self.record(from)?
            .first_link_to(to)
            .map(|record| record.view(from))
    }

    /// Remove every link from `from` to `to`; true if any existed
    pub fn unconnect(&mut self, from: NodeHandle, to: NodeHandle) -> bool {
        let Some(record) = self.record_mut(from) else {
            return false;
        };
        let removed = record.drop_links_to(to);
        if removed > 0 {
            tracing::debug!(from = %from, to = %to, removed, "unconnected");
        }
        removed > 0
    }

    /// Minimum-cost simple path from `from` to `to`.
    ///
    /// Returns `Ok(None)` when no simple path exists and an error when
    /// either handle is not owned by this store.
    #[tracing::instrument(skip_all, fields(from = %from, to = %to))]
    pub fn find_path(&self, from: NodeHandle, to: NodeHandle) -> Result<Option<FoundPath>> {
        self.resolve(from)?;
        self.resolve(to)?;

        let search = &self.config.search;
        let strategy = search
            .strategy
            .resolve(self.len(), search.recursion_limit);
        Ok(PathFinder::new(self, strategy).find(from, to))
    }

    /// Links along the minimum-cost path; empty when unreachable
    pub fn dijkstra(&self, from: NodeHandle, to: NodeHandle) -> Result<Vec<LinkHandle>> {
        let mut links = Vec::new();
        self.dijkstra_into(&mut links, from, to)?;
        Ok(links)
    }

    /// Append the links of the minimum-cost path to `out`.
    /// Returns false, leaving `out` untouched, when unreachable.
    pub fn dijkstra_into(
        &self,
        out: &mut Vec<LinkHandle>,
        from: NodeHandle,
        to: NodeHandle,
    ) -> Result<bool> {
        match self.find_path(from, to)? {
            Some(path) => {
                out.extend_from_slice(path.links());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Nodes of the minimum-cost path, starting with `from`
    pub fn dijkstra_nodes(
        &self,
        from: NodeHandle,
        to: NodeHandle,
    ) -> Result<Option<Vec<NodeHandle>>> {
        Ok(self.find_path(from, to)?.map(FoundPath::into_nodes))
    }

    /// Append the nodes of the minimum-cost path (starting with `from`) to `out`.
    /// Returns false, leaving `out` untouched, when unreachable.
    pub fn dijkstra_nodes_into(
        &self,
        out: &mut Vec<NodeHandle>,
        from: NodeHandle,
        to: NodeHandle,
    ) -> Result<bool> {
        match self.find_path(from, to)? {
            Some(path) => {
                out.extend_from_slice(path.nodes());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub(crate) fn record(&self, node: NodeHandle) -> Option<&NodeRecord<T>> {
        self.resolve(node).ok()
    }

    fn record_mut(&mut self, node: NodeHandle) -> Option<&mut NodeRecord<T>> {
        self.resolve_mut(node).ok()
    }

    fn resolve(&self, node: NodeHandle) -> Result<&NodeRecord<T>> {
        if node.store() != self.id {
            bail_handle!(node, HandleFault::ForeignStore);
        }
        match self.slots.get(node.index()) {
            Some(slot) if slot.generation == node.generation() => match slot.node.as_ref() {
                Some(record) => Ok(record),
                None => bail_handle!(node, HandleFault::Stale),
            },
            _ => bail_handle!(node, HandleFault::Stale),
        }
    }

    fn resolve_mut(&mut self, node: NodeHandle) -> Result<&mut NodeRecord<T>> {
        if node.store() != self.id {
            bail_handle!(node, HandleFault::ForeignStore);
        }
        match self.slots.get_mut(node.index()) {
            Some(slot) if slot.generation == node.generation() => match slot.node.as_mut() {
                Some(record) => Ok(record),
                None => bail_handle!(node, HandleFault::Stale),
            },
            _ => bail_handle!(node, HandleFault::Stale),
        }
    }

    fn handle_at(&self, index: usize) -> NodeHandle {
        NodeHandle::new(self.id, index, self.slots[index].generation)
    }
}

impl<T: PartialEq> GraphStore<T> {
    /// All nodes whose payload equals `value`, in insertion order
    pub fn get_by_value(&self, value: &T) -> Vec<NodeHandle> {
        let mut found = Vec::new();
        self.get_by_value_into(&mut found, value);
        found
    }

    /// Append every node whose payload equals `value` to `out`
    pub fn get_by_value_into(&self, out: &mut Vec<NodeHandle>, value: &T) {
        out.extend(
            self.iter()
                .filter(|(_, candidate)| *candidate == value)
                .map(|(handle, _)| handle),
        );
    }
}

impl<T> Topology for GraphStore<T> {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn outgoing(&self, node: NodeHandle) -> &[LinkRecord] {
        self.record(node).map(NodeRecord::links).unwrap_or(&[])
    }
}
