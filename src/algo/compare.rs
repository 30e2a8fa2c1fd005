/*!
# Cross-Algorithm Comparison

Runs both engines on the same graph and checks that they agree on the total cost.
On a connected graph any two minimum spanning trees have the same cost, so a mismatch
means one of the engines is broken. The mismatch is reported (as a `tracing` warning and
via [`Comparison::check_consistency`]) but both results are kept.

The serialized form of a [`Comparison`] is the per-graph output record:
```text
{ graph_id, input_stats: { vertices, edges }, prim: { .. }, kruskal: { .. } }
```
*/

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::*;

/// Both engines produced a different total cost for the same graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("graph {graph}: total cost mismatch between Prim ({prim}) and Kruskal ({kruskal})")]
pub struct ConsistencyError {
    pub graph: GraphId,
    pub prim: Cost,
    pub kruskal: Cost,
}

/// Size of the input graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputStats {
    pub vertices: usize,
    pub edges: usize,
}

/// Results of both engines on one graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub graph_id: GraphId,
    pub input_stats: InputStats,
    pub prim: MstResult,
    pub kruskal: MstResult,
}

impl Comparison {
    /// Returns the result of the given engine
    pub fn result_of(&self, algorithm: Algorithm) -> &MstResult {
        match algorithm {
            Algorithm::Prim => &self.prim,
            Algorithm::Kruskal => &self.kruskal,
        }
    }

    /// Returns *true* if both engines found the same total cost
    pub fn costs_agree(&self) -> bool {
        self.prim.total_cost() == self.kruskal.total_cost()
    }

    /// Returns an error if both engines disagree on the total cost
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        if self.costs_agree() {
            Ok(())
        } else {
            Err(ConsistencyError {
                graph: self.graph_id,
                prim: self.prim.total_cost(),
                kruskal: self.kruskal.total_cost(),
            })
        }
    }
}

/// Runs both engines with default settings on `graph`.
///
/// A cost mismatch is logged as a warning and does not fail the comparison.
pub fn compare(graph: &Graph) -> Result<Comparison, LookupError> {
    let comparison = Comparison {
        graph_id: graph.id(),
        input_stats: InputStats {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
        },
        prim: Prim::new().find_mst(graph)?,
        kruskal: Kruskal::new().find_mst(graph)?,
    };

    if let Err(mismatch) = comparison.check_consistency() {
        warn!("{mismatch}");
    }

    Ok(comparison)
}

/// Runs [`compare`] on every graph in order
pub fn compare_all<'a, I>(graphs: I) -> Result<Vec<Comparison>, LookupError>
where
    I: IntoIterator<Item = &'a Graph>,
{
    graphs.into_iter().map(compare).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn reference_graphs() {
        let results = compare_all(&[five_node_example(), four_node_example()]).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].graph_id, 1);
        assert_eq!(results[0].prim.total_cost(), 16);
        assert_eq!(
            results[0].input_stats,
            InputStats {
                vertices: 5,
                edges: 7
            }
        );
        assert_eq!(results[1].kruskal.total_cost(), 6);

        for result in &results {
            assert!(result.costs_agree());
            assert!(result.check_consistency().is_ok());
        }
    }

    #[test]
    fn mismatch_is_reported() {
        let mut comparison = compare(&four_node_example()).unwrap();
        comparison.kruskal = MstResult::new(vec![Edge::new("A", "C", 4)], 1, 0.0);

        assert!(!comparison.costs_agree());
        assert_eq!(
            comparison.check_consistency(),
            Err(ConsistencyError {
                graph: 2,
                prim: 6,
                kruskal: 4
            })
        );
    }

    #[test]
    fn random_connected_graphs_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..50 {
            let n = rng.random_range(1..80);
            let extra = rng.random_range(0..4 * n);
            let graph = WeightedGraphGen::new()
                .nodes(n)
                .extra_edges(extra)
                .weights(0..=20)
                .generate(rng, 0);

            let comparison = compare(&graph).unwrap();

            assert!(comparison.costs_agree());
            for algo in Algorithm::ALL {
                let result = comparison.result_of(algo);
                assert_eq!(result.number_of_edges(), n as usize - 1);
                assert!(result.is_spanning_tree_of(&graph));
                if graph.edge_count() > 0 {
                    assert!(result.operations_count() > 0);
                }
            }
        }
    }

    #[test]
    fn distinct_weights_select_identical_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for n in [2, 10, 30, 60] {
            let graph = WeightedGraphGen::new()
                .nodes(n)
                .extra_edges(3 * n)
                .distinct_weights()
                .generate(rng, 0);

            let comparison = compare(&graph).unwrap();
            assert_eq!(
                edge_set(comparison.prim.mst_edges()),
                edge_set(comparison.kruskal.mst_edges())
            );
        }
    }

    #[test]
    fn operation_counts_scale_with_input() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        let small = WeightedGraphGen::new()
            .nodes(20)
            .extra_edges(40)
            .weights(1..=100)
            .generate(rng, 0);
        let large = WeightedGraphGen::new()
            .nodes(400)
            .extra_edges(1600)
            .weights(1..=100)
            .generate(rng, 1);

        assert_eq!(small.edge_count(), 59);
        assert_eq!(large.edge_count(), 1999);

        let small = compare(&small).unwrap();
        let large = compare(&large).unwrap();

        let (small_m, large_m) = (59.0, 1999.0);
        for algo in Algorithm::ALL {
            let (s, l) = (
                small.result_of(algo).operations_count(),
                large.result_of(algo).operations_count(),
            );
            // ~34x the edges: superlinear, but not beyond E log E
            assert!(l < 100 * s, "{algo}: {s} -> {l}");

            let (s_per_edge, l_per_edge) = (s as f64 / small_m, l as f64 / large_m);
            assert!(
                l_per_edge > 1.05 * s_per_edge,
                "{algo}: {s_per_edge:.2} -> {l_per_edge:.2} per edge"
            );
        }
    }

    #[test]
    fn serialized_shape() {
        let comparison = compare(&four_node_example()).unwrap();
        let value = serde_json::to_value(&comparison).unwrap();

        assert_eq!(value["graph_id"], 2);
        assert_eq!(value["input_stats"]["vertices"], 4);
        assert_eq!(value["input_stats"]["edges"], 5);
        assert_eq!(value["prim"]["total_cost"], 6);
        assert_eq!(value["kruskal"]["mst_edges"][0]["from"], "A");
        assert!(value["kruskal"]["operations_count"].as_u64().unwrap() > 0);
        assert!(value["prim"]["execution_time_ms"].is_f64());
    }
}
