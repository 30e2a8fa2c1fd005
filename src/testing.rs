//! Shared fixtures and checks for unit tests

use itertools::Itertools;

use crate::{algo::UnionFind, prelude::*};

/// Five nodes `A..E`; the minimum spanning tree costs 16 (BC, AC, BD, DE)
pub(crate) fn five_node_example() -> Graph {
    Graph::new(
        1,
        ["A", "B", "C", "D", "E"],
        [
            ("A", "B", 4),
            ("A", "C", 3),
            ("B", "C", 2),
            ("B", "D", 5),
            ("C", "D", 7),
            ("C", "E", 8),
            ("D", "E", 6),
        ],
    )
    .unwrap()
}

/// Four nodes `A..D`; the minimum spanning tree costs 6 (AB, BC, CD)
pub(crate) fn four_node_example() -> Graph {
    Graph::new(
        2,
        ["A", "B", "C", "D"],
        [
            ("A", "B", 1),
            ("A", "C", 4),
            ("B", "C", 2),
            ("C", "D", 3),
            ("B", "D", 5),
        ],
    )
    .unwrap()
}

/// Two triangles without a connecting edge
pub(crate) fn two_triangles() -> Graph {
    Graph::new(
        3,
        ["A", "B", "C", "X", "Y", "Z"],
        [
            ("A", "B", 1),
            ("B", "C", 2),
            ("C", "A", 3),
            ("X", "Y", 4),
            ("Y", "Z", 5),
            ("Z", "X", 6),
        ],
    )
    .unwrap()
}

/// Brute force minimum spanning tree cost over all `(n-1)`-subsets of edges.
/// Only usable for tiny graphs; returns `None` if the graph is disconnected.
pub(crate) fn brute_force_mst_cost(graph: &Graph) -> Option<Cost> {
    let n = graph.number_of_nodes();
    if n == 0 {
        return Some(0);
    }

    graph
        .weighted_edges()
        .combinations(n as usize - 1)
        .filter(|edges| {
            let mut uf: UnionFind<Node> = UnionFind::new(graph.vertices());
            edges
                .iter()
                .all(|e| uf.union(&e.u, &e.v).unwrap_or(false))
        })
        .map(|edges| edges.iter().map(|e| e.weight).sum())
        .min()
}

/// Asserts that `edges` are edges of `graph` and contain no cycle
pub(crate) fn assert_forest(graph: &Graph, edges: &[Edge]) {
    let mut uf: UnionFind<Label> = UnionFind::new(graph.nodes().iter().cloned());
    for e in edges {
        assert!(
            graph.contains_edge(e),
            "{e} is not an edge of graph {}",
            graph.id()
        );
        assert!(
            uf.union(&e.from, &e.to).unwrap(),
            "{e} closes a cycle"
        );
    }
}

/// Sorted `(from, to, weight)` triples with endpoints normalized, for set comparisons
pub(crate) fn edge_set(edges: &[Edge]) -> Vec<(String, String, Weight)> {
    edges
        .iter()
        .map(|e| {
            let (a, b) = (e.from.as_str(), e.to.as_str());
            let (a, b) = if a <= b { (a, b) } else { (b, a) };
            (a.to_string(), b.to_string(), e.weight)
        })
        .sorted()
        .collect_vec()
}
