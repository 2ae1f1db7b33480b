use crate::graph::handle::{LinkHandle, NodeHandle};
use crate::graph::link::{Cost, LinkRecord};

/// Nodes on the active search path.
///
/// Pushed before a node's links are explored and popped once they are
/// exhausted, so sibling branches see exactly the ancestors of the branch
/// point. Membership is tracked per slot for constant-time checks.
#[derive(Debug)]
pub struct VisitedStack {
    stack: Vec<NodeHandle>,
    on_path: Vec<bool>,
}

impl VisitedStack {
    pub fn with_slots(slots: usize) -> Self {
        Self {
            stack: Vec::new(),
            on_path: vec![false; slots],
        }
    }

    pub fn push(&mut self, node: NodeHandle) {
        if node.index() >= self.on_path.len() {
            self.on_path.resize(node.index() + 1, false);
        }
        self.on_path[node.index()] = true;
        self.stack.push(node);
    }

    pub fn pop(&mut self) -> Option<NodeHandle> {
        let node = self.stack.pop()?;
        self.on_path[node.index()] = false;
        Some(node)
    }

    pub fn contains(&self, node: NodeHandle) -> bool {
        self.on_path.get(node.index()).copied().unwrap_or(false)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Counters collected during one search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose outgoing links were explored
    pub expanded: u64,
    /// Links followed into an unvisited node
    pub followed: u64,
    /// Links skipped because their destination was on the active path
    pub skipped: u64,
    /// Deepest visited stack seen
    pub max_depth: usize,
}

impl SearchStats {
    pub(crate) fn record_expand(&mut self, visited: &VisitedStack) {
        self.expanded += 1;
        self.max_depth = self.max_depth.max(visited.depth());
    }
}

/// Best route found from some node to the destination.
///
/// Hops are stored destination-first because each level of the search
/// appends the link it took on the way back up.
#[derive(Debug, Clone)]
pub struct Branch {
    pub cost: Cost,
    hops: Vec<(LinkHandle, NodeHandle)>,
}

impl Branch {
    /// Zero-cost branch for a node that is the destination itself
    pub fn arrived() -> Self {
        Self {
            cost: 0,
            hops: Vec::new(),
        }
    }

    /// Cost of reaching the destination through `link` then this branch
    pub fn cost_via(&self, link: &LinkRecord) -> Cost {
        self.cost.saturating_add(Cost::from(link.metric()))
    }

    /// Prefix this branch with `link` taken from `source`
    pub fn extend(mut self, source: NodeHandle, link: &LinkRecord) -> Self {
        self.cost = self.cost_via(link);
        self.hops.push((link.handle(source), link.destination()));
        self
    }

    /// Links and nodes from the first hop to the destination
    pub fn into_hops(mut self) -> (Cost, Vec<(LinkHandle, NodeHandle)>) {
        self.hops.reverse();
        (self.cost, self.hops)
    }
}

/// Keep `candidate` if it beats `best` strictly.
///
/// Equal costs keep the earlier branch, which is what makes link order the
/// tie-break.
pub fn offer(best: &mut Option<Branch>, candidate: Branch) {
    if best.as_ref().is_none_or(|current| candidate.cost < current.cost) {
        *best = Some(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::handle::StoreId;

    #[test]
    fn test_visited_stack_push_pop() {
        let store = StoreId::next();
        let a = NodeHandle::new(store, 0, 0);
        let b = NodeHandle::new(store, 4, 0);
        let mut visited = VisitedStack::with_slots(2);

        visited.push(a);
        visited.push(b);
        assert!(visited.contains(a));
        assert!(visited.contains(b));
        assert_eq!(visited.depth(), 2);

        assert_eq!(visited.pop(), Some(b));
        assert!(!visited.contains(b));
        assert!(visited.contains(a));
        assert_eq!(visited.pop(), Some(a));
        assert_eq!(visited.pop(), None);
    }

    #[test]
    fn test_offer_keeps_first_on_tie() {
        let store = StoreId::next();
        let source = NodeHandle::new(store, 0, 0);
        let target = NodeHandle::new(store, 1, 0);
        let first = LinkRecord::new(0, target, 3);
        let second = LinkRecord::new(1, target, 3);

        let mut best = None;
        offer(&mut best, Branch::arrived().extend(source, &first));
        offer(&mut best, Branch::arrived().extend(source, &second));

        let (cost, hops) = best.unwrap().into_hops();
        assert_eq!(cost, 3);
        assert_eq!(hops[0].0.serial(), 0);
    }

    #[test]
    fn test_cost_saturates() {
        let store = StoreId::next();
        let target = NodeHandle::new(store, 1, 0);
        let link = LinkRecord::new(0, target, 1);
        let branch = Branch {
            cost: Cost::MAX,
            hops: Vec::new(),
        };
        assert_eq!(branch.cost_via(&link), Cost::MAX);
    }
}
