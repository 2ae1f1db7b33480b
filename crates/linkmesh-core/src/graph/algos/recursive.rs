use crate::graph::algos::shared::{offer, Branch, SearchStats, VisitedStack};
use crate::graph::handle::NodeHandle;
use crate::graph::topology::Topology;

/// Depth-first backtracking search on the call stack.
///
/// Recursion depth is bounded by the number of nodes on the longest
/// simple path, which is why large graphs go through the iterative form.
pub fn search<G: Topology + ?Sized>(
    graph: &G,
    current: NodeHandle,
    destination: NodeHandle,
    visited: &mut VisitedStack,
    stats: &mut SearchStats,
) -> Option<Branch> {
    if current == destination {
        return Some(Branch::arrived());
    }

    visited.push(current);
    stats.record_expand(visited);

    let mut best = None;
    for link in graph.outgoing(current) {
        let next = link.destination();
        if visited.contains(next) {
            stats.skipped += 1;
            continue;
        }
        stats.followed += 1;

        if let Some(below) = search(graph, next, destination, visited, stats) {
            offer(&mut best, below.extend(current, link));
        }
    }

    visited.pop();
    best
}
