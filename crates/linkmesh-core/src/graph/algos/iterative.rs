use crate::graph::algos::shared::{offer, Branch, SearchStats, VisitedStack};
use crate::graph::handle::NodeHandle;
use crate::graph::topology::Topology;

/// One node being expanded
struct Frame {
    node: NodeHandle,
    /// Index of the next outgoing link to try
    next_link: usize,
    best: Option<Branch>,
}

impl Frame {
    fn new(node: NodeHandle) -> Self {
        Self {
            node,
            next_link: 0,
            best: None,
        }
    }
}

/// Depth-first backtracking search on an explicit frame stack.
///
/// Visits links in the same order as the recursive search and pushes and
/// pops the visited stack at the same points, so both return the same
/// path for the same graph.
pub fn search<G: Topology + ?Sized>(
    graph: &G,
    start: NodeHandle,
    destination: NodeHandle,
    visited: &mut VisitedStack,
    stats: &mut SearchStats,
) -> Option<Branch> {
    if start == destination {
        return Some(Branch::arrived());
    }

    visited.push(start);
    stats.record_expand(visited);
    let mut frames = vec![Frame::new(start)];

    while let Some(frame) = frames.last_mut() {
        let links = graph.outgoing(frame.node);

        let Some(link) = links.get(frame.next_link) else {
            // Links exhausted: hand the best branch to the parent frame
            let done = frames.pop()?;
            visited.pop();
            let Some(parent) = frames.last_mut() else {
                return done.best;
            };
            if let Some(below) = done.best {
                let taken = &graph.outgoing(parent.node)[parent.next_link - 1];
                offer(&mut parent.best, below.extend(parent.node, taken));
            }
            continue;
        };
        frame.next_link += 1;

        let next = link.destination();
        if visited.contains(next) {
            stats.skipped += 1;
            continue;
        }
        stats.followed += 1;

        if next == destination {
            offer(&mut frame.best, Branch::arrived().extend(frame.node, link));
        } else {
            visited.push(next);
            stats.record_expand(visited);
            frames.push(Frame::new(next));
        }
    }

    None
}
