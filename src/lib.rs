/*!
`wmst` computes **minimum spanning trees** of small **w**eighted undirected graphs with two
classical engines, Prim's and Kruskal's algorithm, and reports comparable statistics for both:
total cost, number of primitive operations and execution time.

# Representation

Graphs are declared over opaque [`Label`]s (e.g. `"A"`, `"B"`) and undirected weighted [`Edge`]s
between them. A [`Graph`] is an immutable snapshot: on construction every label is assigned its
position in the node sequence as internal [`Node`] index and all edges are resolved against it.
Edges referencing undeclared nodes are rejected right there, so the engines never see them.

- The node sequence is ordered; Prim's engine starts at its first node.
- Edges are undirected: `A - B` and `B - A` connect the same nodes and are never reoriented.
- Weights are integers (`i64`); negative weights are not supported.

# Design

Algorithms are provided as configurable structs ([`Prim`](algo::Prim), [`Kruskal`](algo::Kruskal))
implementing [`MstAlgorithm`](algo::MstAlgorithm). They hold no state between calls: every call
allocates its own frontier / disjoint-set structures, so independent graphs can be processed in
parallel. Each call returns a fresh [`MstResult`](algo::MstResult).

A graph without nodes yields an empty result; a disconnected graph yields fewer than `n - 1`
edges. [`compare`](algo::compare) runs both engines and flags a cost mismatch, which on a connected
graph can only be caused by a broken engine.

# Usage

There are *4* submodules you probably want to interact with:
- [`prelude`] includes labels, nodes, edges, the graph type and its getter traits,
- [`algo`] includes the engines, the union-find structure and the comparison,
- [`gens`] includes a random generator for weighted graphs with known connectivity,
- [`io`] includes readers/writers for the JSON input and output documents and a DOT writer.

```
use wmst::{prelude::*, algo::*};

let graph = Graph::new(
    2,
    ["A", "B", "C", "D"],
    [("A", "B", 1), ("A", "C", 4), ("B", "C", 2), ("C", "D", 3), ("B", "D", 5)],
).unwrap();

let prim = graph.prim_mst().unwrap();
let kruskal = graph.kruskal_mst().unwrap();

assert_eq!(prim.total_cost(), 6);
assert_eq!(kruskal.total_cost(), 6);
assert_eq!(prim.number_of_edges(), 3);
```
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod graph;
pub mod io;
pub mod node;
pub mod ops;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use graph::*;
pub use node::*;

/// `wmst::prelude` includes labels, nodes, edges, the graph type and all graph getter traits.
pub mod prelude {
    pub use super::{edge::*, graph::*, node::*, ops::*};
}
