/*!
# Graph Generators

Random weighted graphs for tests and benchmarks.

[`WeightedGraphGen`] is configured builder-style and always produces a graph whose connectivity
is known in advance: every component is spanned by a [`RandomTree`], additional edges are only
placed inside components.

```
use wmst::{prelude::*, gens::*};

let mut rng = rand::rng();
let graph = WeightedGraphGen::new()
    .nodes(10)
    .extra_edges(15)
    .weights(1..=100)
    .generate(&mut rng, 1);

assert_eq!(graph.vertex_count(), 10);
assert_eq!(graph.edge_count(), 9 + 15);
```
*/

use std::ops::RangeInclusive;

use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};

use crate::prelude::*;

mod tree;

pub use tree::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Generator for random weighted graphs with a fixed number of components
#[derive(Debug, Clone)]
pub struct WeightedGraphGen {
    n: NumNodes,
    extra_edges: NumEdges,
    components: NumNodes,
    weights: RangeInclusive<Weight>,
    distinct_weights: bool,
    prefix: String,
}

impl Default for WeightedGraphGen {
    fn default() -> Self {
        Self {
            n: 0,
            extra_edges: 0,
            components: 1,
            weights: 1..=100,
            distinct_weights: false,
            prefix: "v".into(),
        }
    }
}

impl NumNodesGen for WeightedGraphGen {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl WeightedGraphGen {
    /// Creates a generator for a single component with weights in `1..=100`
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges added on top of the spanning trees.
    /// They may form parallel edges but never loops.
    pub fn extra_edges(mut self, m: NumEdges) -> Self {
        self.extra_edges = m;
        self
    }

    /// Number of connected components (at least one).
    /// Nodes are split into contiguous blocks of almost equal size.
    pub fn components(mut self, components: NumNodes) -> Self {
        self.components = components.max(1);
        self
    }

    /// Range edge weights are drawn from uniformly
    pub fn weights(mut self, weights: RangeInclusive<Weight>) -> Self {
        let (lo, hi) = weights.into_inner();
        self.weights = lo.min(hi)..=lo.max(hi);
        self.distinct_weights = false;
        self
    }

    /// Assigns the weights `1..=m` in random order, ie. all weights differ
    pub fn distinct_weights(mut self) -> Self {
        self.distinct_weights = true;
        self
    }

    /// Prefix of the generated node labels (default `v`)
    pub fn label_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Generates a random graph with the given id
    pub fn generate<R: Rng>(&self, rng: &mut R, id: GraphId) -> Graph {
        let blocks = self.blocks();
        let mut pairs = Vec::with_capacity(self.n as usize + self.extra_edges as usize);

        for &(offset, size) in &blocks {
            pairs.extend(
                RandomTree::new(size, 0, rng)
                    .collect_vec()
                    .into_iter()
                    .map(|(u, v)| (u + offset, v + offset)),
            );
        }

        let dense = blocks.iter().filter(|(_, size)| *size >= 2).collect_vec();
        if !dense.is_empty() {
            for _ in 0..self.extra_edges {
                let &&(offset, size) = &dense[rng.random_range(0..dense.len())];
                let u = rng.random_range(0..size);
                let v = (u + rng.random_range(1..size)) % size;
                pairs.push((u + offset, v + offset));
            }
        }

        pairs.shuffle(rng);

        let mut weights = if self.distinct_weights {
            (1..=pairs.len() as Weight).collect_vec()
        } else {
            (0..pairs.len())
                .map(|_| rng.random_range(self.weights.clone()))
                .collect_vec()
        };
        weights.shuffle(rng);

        let edges = pairs
            .into_iter()
            .zip(weights)
            .map(|((u, v), w)| if rng.random_bool(0.5) { (u, v, w) } else { (v, u, w) })
            .collect_vec();

        Graph::with_numbered_nodes(id, self.n, &self.prefix, edges)
    }

    /// Splits `0..n` into `(offset, size)` blocks, one per component
    fn blocks(&self) -> Vec<(Node, NumNodes)> {
        let k = self.components.min(self.n.max(1));
        let (base, rest) = (self.n / k, self.n % k);

        let mut offset = 0;
        (0..k)
            .map(|i| {
                let size = base + (i < rest) as NumNodes;
                let block = (offset, size);
                offset += size;
                block
            })
            .collect()
    }
}
