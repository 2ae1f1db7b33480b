//! Graph-wide invariants checked over generated graphs

use linkmesh::prelude::*;
use linkmesh::Cost;

/// Ring of `n` nodes with chords; every node reaches every other node
fn ring_with_chords(n: usize) -> (GraphStore<usize>, Vec<NodeHandle>) {
    let mut graph = GraphStore::new();
    let nodes: Vec<_> = (0..n).map(|i| graph.add(i % 3)).collect();
    for i in 0..n {
        graph.connect(nodes[i], nodes[(i + 1) % n], 1).unwrap();
        graph.connect(nodes[i], nodes[(i + 3) % n], 2).unwrap();
    }
    (graph, nodes)
}

#[test]
fn test_every_node_reaches_itself() {
    let (graph, nodes) = ring_with_chords(8);
    for &n in &nodes {
        let path = graph.find_path(n, n).unwrap().unwrap();
        assert_eq!(path.nodes(), &[n]);
        assert_eq!(path.cost(), 0);
    }
}

#[test]
fn test_paths_are_simple_and_costs_add_up() {
    let (graph, nodes) = ring_with_chords(8);
    for &from in &nodes {
        for &to in &nodes {
            let path = graph.find_path(from, to).unwrap().unwrap();
            let mut seen = path.nodes().to_vec();
            seen.sort_by_key(|n| n.index());
            seen.dedup();
            assert_eq!(seen.len(), path.nodes().len());

            let total: Cost = path
                .links()
                .iter()
                .map(|&link| Cost::from(graph.link(link).unwrap().metric()))
                .sum();
            assert_eq!(total, path.cost());
            assert_eq!(path.start(), from);
            assert_eq!(path.end(), to);
        }
    }
}

#[test]
fn test_get_by_value_matches_payloads() {
    let (graph, nodes) = ring_with_chords(9);
    for value in 0..3 {
        let expected: Vec<_> = nodes
            .iter()
            .copied()
            .filter(|&n| graph.value(n) == Some(&value))
            .collect();
        assert_eq!(graph.get_by_value(&value), expected);
        assert_eq!(expected.len(), 3);
    }
}

#[test]
fn test_remove_leaves_no_references() {
    let (mut graph, nodes) = ring_with_chords(8);
    let victim = nodes[4];
    assert!(graph.remove(victim));

    for &n in nodes.iter().filter(|&&n| n != victim) {
        let node = graph.node(n).unwrap();
        assert!(node.get_link_to(victim).is_none());
        assert!(node.links().all(|link| link.destination() != victim));
    }
    // Each survivor had two links; those pointing at the victim are gone
    assert_eq!(graph.link_count(), 7 * 2 - 2);
}

#[test]
fn test_failed_query_does_not_mutate() {
    let (mut graph, nodes) = ring_with_chords(6);
    let island = graph.add(99);
    let links = graph.link_count();

    assert!(graph.find_path(nodes[0], island).unwrap().is_none());
    assert_eq!(graph.link_count(), links);
    assert_eq!(graph.len(), 7);
}
