/*!
# Minimum Spanning Tree Algorithms

This module provides the two MST engines and everything needed to compare them:
- [`Prim`]: grows one tree from a start node using a lazy min-heap frontier,
- [`Kruskal`]: scans globally sorted edges, using a [`UnionFind`] for cycle detection,
- [`compare`]: runs both on a graph and checks that their total costs agree.

All engines implement [`MstAlgorithm`] and report an [`MstResult`] including the
selected edges, their total cost, an operation count and the elapsed time.
```rust
use wmst::{prelude::*, algo::*};

let graph = Graph::new(7, ["A", "B", "C"], [("A", "B", 2), ("B", "C", 1), ("A", "C", 5)]).unwrap();

let comparison = compare(&graph).unwrap();
assert!(comparison.costs_agree());
assert_eq!(comparison.prim.total_cost(), 3);
```
*/

mod compare;
mod kruskal;
mod mst;
mod prim;
mod union_find;

use crate::prelude::*;

pub use compare::*;
pub use kruskal::*;
pub use mst::*;
pub use prim::*;
pub use union_find::*;
