use crate::graph::handle::NodeHandle;
use crate::graph::link::LinkRecord;

/// Trait for providing graph adjacency to the path search
pub trait Topology {
    /// Number of live nodes
    fn node_count(&self) -> usize;

    /// Upper bound (exclusive) on node handle indices
    fn slot_count(&self) -> usize;

    /// Outgoing links of `node` in stored order; empty for unknown nodes
    fn outgoing(&self, node: NodeHandle) -> &[LinkRecord];
}
