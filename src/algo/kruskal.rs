use std::time::Instant;

use tracing::{debug, trace};

use super::{mst::elapsed_ms, *};

/// Kruskal's algorithm: scans all edges by ascending weight and keeps every edge that connects
/// two different components, tracked by a [`UnionFind`] over the graph's nodes.
///
/// On disconnected graphs, the result is a minimum spanning forest.
///
/// # Examples
/// ```
/// use wmst::{prelude::*, algo::*};
///
/// let graph = Graph::new(
///     2,
///     ["A", "B", "C", "D"],
///     [("A", "B", 1), ("A", "C", 4), ("B", "C", 2), ("C", "D", 3), ("B", "D", 5)],
/// ).unwrap();
///
/// let result = Kruskal::new().find_mst(&graph).unwrap();
/// assert_eq!(result.total_cost(), 6);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Kruskal {
    early_exit: bool,
}

impl Default for Kruskal {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

impl Kruskal {
    pub const NAME: &'static str = "Kruskal";

    /// Creates an engine that stops as soon as `n - 1` edges are selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to stop once `n - 1` edges are selected (default) or to scan all edges
    pub fn set_early_exit(&mut self, early_exit: bool) {
        self.early_exit = early_exit;
    }

    /// Sets whether to stop once `n - 1` edges are selected (default) or to scan all edges
    pub fn early_exit(mut self, early_exit: bool) -> Self {
        self.set_early_exit(early_exit);
        self
    }
}

impl MstAlgorithm for Kruskal {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn find_mst(&self, graph: &Graph) -> Result<MstResult, LookupError> {
        let timer = Instant::now();
        let mut ops = OperationCounter::default();

        let mut sorted = (0..graph.number_of_edges()).collect::<Vec<EdgeId>>();
        sorted.sort_unstable_by_key(|&id| graph.edge_at(id).weight);
        ops.add(sort_operations(sorted.len()));

        let target = graph.vertex_count().saturating_sub(1);
        let mut uf: UnionFind<Node> = UnionFind::new(graph.vertices());
        let mut selected = Vec::with_capacity(target);

        for id in sorted {
            ops.tick();
            let edge = graph.edge_at(id);
            let root_u = uf.find(&edge.u)?;
            let root_v = uf.find(&edge.v)?;
            ops.add(2);

            if root_u == root_v {
                trace!(edge = id, "discard cycle edge");
                continue;
            }

            selected.push(id);
            uf.union(&edge.u, &edge.v)?;
            ops.tick();

            if self.early_exit && selected.len() == target {
                break;
            }
        }

        ops.add(uf.operations());

        let result = MstResult::new(
            selected.into_iter().map(|id| graph.edge(id).clone()).collect(),
            ops.get(),
            elapsed_ms(timer),
        );

        debug!(
            graph = graph.id(),
            cost = result.total_cost(),
            edges = result.number_of_edges(),
            ops = result.operations_count(),
            components = uf.number_of_sets(),
            "kruskal finished"
        );

        Ok(result)
    }
}

/// Estimated comparisons of sorting `m` items: `m * floor(ln m)`
fn sort_operations(m: usize) -> u64 {
    if m < 2 {
        return 0;
    }
    m as u64 * (m as f64).ln().floor() as u64
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn four_node_example_cost() {
        let graph = four_node_example();
        let result = Kruskal::new().find_mst(&graph).unwrap();

        assert_eq!(result.total_cost(), 6);
        assert_eq!(
            result.mst_edges(),
            &[
                Edge::new("A", "B", 1),
                Edge::new("B", "C", 2),
                Edge::new("C", "D", 3),
            ]
        );
    }

    #[test]
    fn five_node_example_cost() {
        let graph = five_node_example();
        let result = Kruskal::new().find_mst(&graph).unwrap();

        assert_eq!(result.total_cost(), 16);
        assert_eq!(
            result.mst_edges(),
            &[
                Edge::new("B", "C", 2),
                Edge::new("A", "C", 3),
                Edge::new("B", "D", 5),
                Edge::new("D", "E", 6),
            ]
        );
    }

    #[test]
    fn empty_graph() {
        let result = Kruskal::new().find_mst(&Graph::empty(0)).unwrap();

        assert_eq!(result.total_cost(), 0);
        assert!(result.mst_edges().is_empty());
        assert_eq!(result.operations_count(), 0);
    }

    #[test]
    fn single_node_with_loop_counts_work() {
        let graph = Graph::new(4, ["A"], [("A", "A", 3)]).unwrap();

        for kruskal in [Kruskal::new(), Kruskal::new().early_exit(false)] {
            let result = kruskal.find_mst(&graph).unwrap();
            assert!(result.mst_edges().is_empty());
            assert!(result.operations_count() > 0);
        }

        assert!(Prim::new().find_mst(&graph).unwrap().operations_count() > 0);
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let graph = WeightedGraphGen::new()
            .nodes(40)
            .extra_edges(120)
            .weights(1..=5)
            .generate(rng, 0);

        let first = Kruskal::new().find_mst(&graph).unwrap();
        let second = Kruskal::new().find_mst(&graph).unwrap();

        assert_eq!(first.mst_edges(), second.mst_edges());
        assert_eq!(first.total_cost(), second.total_cost());
        assert_eq!(first.operations_count(), second.operations_count());
    }

    #[test]
    fn disconnected_graph_yields_forest() {
        let graph = two_triangles();
        let result = Kruskal::new().find_mst(&graph).unwrap();

        assert_eq!(result.number_of_edges(), 4);
        assert_eq!(result.total_cost(), 1 + 2 + 4 + 5);
        assert_forest(&graph, result.mst_edges());
    }

    #[test]
    fn early_exit_saves_work() {
        let graph = five_node_example();

        let early = Kruskal::new().find_mst(&graph).unwrap();
        let full = Kruskal::new().early_exit(false).find_mst(&graph).unwrap();

        assert_eq!(early.mst_edges(), full.mst_edges());
        assert!(early.operations_count() < full.operations_count());
    }

    #[test]
    fn sort_estimate() {
        assert_eq!(sort_operations(0), 0);
        assert_eq!(sort_operations(1), 0);
        assert_eq!(sort_operations(7), 7);
        assert_eq!(sort_operations(100), 400);
    }

    #[test]
    fn random_graphs_match_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in 1..7 {
            for extra in [0, 3, 6] {
                let graph = WeightedGraphGen::new()
                    .nodes(n)
                    .extra_edges(extra)
                    .weights(0..=9)
                    .generate(rng, 0);

                let result = Kruskal::new().find_mst(&graph).unwrap();

                assert!(result.is_spanning_tree_of(&graph));
                assert_eq!(Some(result.total_cost()), brute_force_mst_cost(&graph));
            }
        }
    }
}
