//! Minimum-cost simple path search
//!
//! This is an exhaustive backtracking search, not a priority-queue
//! Dijkstra: every simple path from the start is enumerated and the
//! cheapest is kept. Worst-case time is exponential in the graph size and
//! there is no built-in abort. Metrics may be negative.

use std::time::Instant;

use crate::config::{SearchStrategy, DEFAULT_RECURSION_LIMIT};
use crate::graph::algos::{iterative, recursive, SearchStats, VisitedStack};
use crate::graph::handle::{LinkHandle, NodeHandle};
use crate::graph::link::Cost;
use crate::graph::topology::Topology;
use crate::trace_time;

/// A path returned by the search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundPath {
    nodes: Vec<NodeHandle>,
    links: Vec<LinkHandle>,
    cost: Cost,
}

impl FoundPath {
    /// Nodes from start to destination, both included
    pub fn nodes(&self) -> &[NodeHandle] {
        &self.nodes
    }

    /// Links traversed, one fewer than `nodes`
    pub fn links(&self) -> &[LinkHandle] {
        &self.links
    }

    /// Sum of the traversed link metrics
    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn start(&self) -> NodeHandle {
        self.nodes[0]
    }

    pub fn end(&self) -> NodeHandle {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of links in the path
    pub fn hops(&self) -> usize {
        self.links.len()
    }

    pub fn into_nodes(self) -> Vec<NodeHandle> {
        self.nodes
    }

    pub fn into_links(self) -> Vec<LinkHandle> {
        self.links
    }
}

/// Runs one search over a [`Topology`]
pub struct PathFinder<'a, G: Topology + ?Sized> {
    graph: &'a G,
    strategy: SearchStrategy,
    stats: SearchStats,
}

impl<'a, G: Topology + ?Sized> PathFinder<'a, G> {
    /// `SearchStrategy::Auto` is resolved against the default recursion limit
    pub fn new(graph: &'a G, strategy: SearchStrategy) -> Self {
        let strategy = strategy.resolve(graph.node_count(), DEFAULT_RECURSION_LIMIT);
        Self {
            graph,
            strategy,
            stats: SearchStats::default(),
        }
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Counters from the most recent `find`
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Cheapest simple path from `start` to `destination`.
    ///
    /// Ties go to the path whose links come first in stored order.
    /// `start == destination` yields the zero-cost single-node path.
    pub fn find(&mut self, start: NodeHandle, destination: NodeHandle) -> Option<FoundPath> {
        let begin = Instant::now();
        let mut visited = VisitedStack::with_slots(self.graph.slot_count());
        self.stats = SearchStats::default();

        let branch = match self.strategy {
            SearchStrategy::Iterative => {
                iterative::search(self.graph, start, destination, &mut visited, &mut self.stats)
            }
            SearchStrategy::Recursive | SearchStrategy::Auto => {
                recursive::search(self.graph, start, destination, &mut visited, &mut self.stats)
            }
        };
        debug_assert_eq!(visited.depth(), 0);

        trace_time!(begin, "path_search", nodes = self.graph.node_count());
        tracing::debug!(
            found = branch.is_some(),
            expanded = self.stats.expanded,
            followed = self.stats.followed,
            skipped = self.stats.skipped,
            max_depth = self.stats.max_depth,
            "path search finished"
        );

        branch.map(|branch| {
            let (cost, hops) = branch.into_hops();
            let mut nodes = Vec::with_capacity(hops.len() + 1);
            nodes.push(start);
            let mut links = Vec::with_capacity(hops.len());
            for (link, node) in hops {
                links.push(link);
                nodes.push(node);
            }
            FoundPath { nodes, links, cost }
        })
    }
}
