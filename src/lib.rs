//! Linkmesh - in-memory directed weighted graph
//!
//! Nodes carry an arbitrary payload and own their outgoing links. The
//! store answers minimum-cost simple path queries by exhaustive
//! backtracking, so results are exact for any integer metrics (negative
//! ones included) at exponential worst-case cost.
//!
//! ```rust,ignore
//! use linkmesh::GraphStore;
//!
//! let mut graph = GraphStore::new();
//! let a = graph.add("A");
//! let b = graph.add("B");
//! graph.node_mut(a)?.connect_to(b, 3)?;
//! let path = graph.find_path(a, b)?.expect("reachable");
//! assert_eq!(path.cost(), 3);
//! ```

use std::path::Path;

pub use linkmesh_core::config::{GraphConfig, LoggingConfig, SearchConfig, SearchStrategy};
pub use linkmesh_core::error::{ErrorClass, GraphError, HandleFault, Result};
pub use linkmesh_core::graph::{
    Cost, FoundPath, GraphStore, Link, LinkHandle, Metric, NodeHandle, NodeMut, NodeRef,
    PathFinder, SearchStats, Topology,
};
pub use linkmesh_core::logging;

/// Commonly used types
pub mod prelude {
    pub use crate::{FoundPath, GraphStore, LinkHandle, NodeHandle, SearchStrategy};
}

/// Build an empty store configured from a TOML file.
///
/// Logging is initialised from the file's `[logging]` section unless a
/// global subscriber is already installed.
pub fn open_with_config<T>(path: &Path) -> Result<GraphStore<T>> {
    let config = GraphConfig::load(path)?;
    if let Err(err) = logging::init_from_config(&config.logging) {
        tracing::debug!(error = %err, "tracing already initialised");
    }
    Ok(GraphStore::with_config(config))
}
