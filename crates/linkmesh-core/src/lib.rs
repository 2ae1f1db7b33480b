//! Linkmesh Core Library
//!
//! In-memory directed weighted graph with a minimum-cost simple path query.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;

pub use config::{GraphConfig, SearchStrategy};
pub use error::{GraphError, Result};
pub use graph::{FoundPath, GraphStore, Link, LinkHandle, Metric, NodeHandle};
