//! Graph container and minimum-cost path search
//!
//! - `store`: the owning container (`GraphStore`)
//! - `node` / `link`: per-node records and their link operations
//! - `handle`: generation-checked handles handed to callers
//! - `path` / `algos`: backtracking search over simple paths
//! - `topology`: adjacency trait the search runs against

pub mod algos;
pub mod handle;
pub mod link;
pub mod node;
pub mod path;
pub mod store;
pub mod topology;

pub use algos::SearchStats;
pub use handle::{LinkHandle, NodeHandle};
pub use link::{Cost, Link, LinkRecord, Metric};
pub use node::{NodeMut, NodeRecord, NodeRef};
pub use path::{FoundPath, PathFinder};
pub use store::GraphStore;
pub use topology::Topology;
