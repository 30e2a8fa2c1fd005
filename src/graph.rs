/*!
# Weighted Graph

[`Graph`] is an immutable snapshot of an undirected weighted graph: an identifier, an ordered
sequence of unique node labels and a sequence of edges between them. All derived structure
(label index, resolved edges, incidence lists) is built once in [`Graph::new`], which also
rejects graphs whose edges reference undeclared nodes.

```
use wmst::prelude::*;

let graph = Graph::new(
    1,
    ["A", "B", "C"],
    [("A", "B", 1), ("B", "C", 2)],
).unwrap();

assert_eq!(graph.vertex_count(), 3);
assert_eq!(graph.edge_count(), 2);
assert_eq!(graph.node_of("C"), Some(2));
```
*/

use fxhash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;

use crate::prelude::*;

/// Identifier of a graph as given on input
pub type GraphId = i64;

/// Incidence list of a single node; most nodes in the graphs we see have small degree
type Incidence = SmallVec<[EdgeId; 4]>;

/// Errors raised when a graph violates its construction invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graph {graph}: node {label} is declared more than once")]
    DuplicateNode { graph: GraphId, label: Label },

    #[error("graph {graph}: edge #{edge} references undeclared node {label}")]
    UnknownEndpoint {
        graph: GraphId,
        edge: usize,
        label: Label,
    },

    #[error("graph {graph}: too many {what} ({count})")]
    TooLarge {
        graph: GraphId,
        what: &'static str,
        count: usize,
    },
}

/// An immutable undirected weighted graph over labelled nodes
#[derive(Debug, Clone)]
pub struct Graph {
    id: GraphId,
    labels: Vec<Label>,
    index: FxHashMap<Label, Node>,
    edges: Vec<Edge>,
    resolved: Vec<WeightedEdge>,
    incidence: Vec<Incidence>,
}

impl Graph {
    /// Creates a graph from its node sequence and edges.
    ///
    /// # Errors
    /// - [`GraphError::DuplicateNode`] if a label occurs twice in `nodes`
    /// - [`GraphError::UnknownEndpoint`] if an edge endpoint is not in `nodes`
    /// - [`GraphError::TooLarge`] if there are more than `2^32 - 2` nodes or edges
    pub fn new<N, E>(id: GraphId, nodes: N, edges: E) -> Result<Self, GraphError>
    where
        N: IntoIterator,
        N::Item: Into<Label>,
        E: IntoIterator,
        E::Item: Into<Edge>,
    {
        let labels: Vec<Label> = nodes.into_iter().map(Into::into).collect();
        let edges: Vec<Edge> = edges.into_iter().map(Into::into).collect();

        if labels.len() >= INVALID_NODE as usize {
            return Err(GraphError::TooLarge {
                graph: id,
                what: "nodes",
                count: labels.len(),
            });
        }
        if edges.len() >= NumEdges::MAX as usize {
            return Err(GraphError::TooLarge {
                graph: id,
                what: "edges",
                count: edges.len(),
            });
        }

        let mut index = FxHashMap::default();
        index.reserve(labels.len());
        for (u, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), u as Node).is_some() {
                return Err(GraphError::DuplicateNode {
                    graph: id,
                    label: label.clone(),
                });
            }
        }

        let resolve = |edge: usize, label: &Label| {
            index
                .get(label)
                .copied()
                .ok_or_else(|| GraphError::UnknownEndpoint {
                    graph: id,
                    edge,
                    label: label.clone(),
                })
        };

        let mut resolved = Vec::with_capacity(edges.len());
        let mut incidence = vec![Incidence::new(); labels.len()];
        for (i, edge) in edges.iter().enumerate() {
            let u = resolve(i, &edge.from)?;
            let v = resolve(i, &edge.to)?;
            let edge = WeightedEdge {
                u,
                v,
                weight: edge.weight,
                id: i as EdgeId,
            };

            attach(&mut incidence, edge);
            resolved.push(edge);
        }

        Ok(Self {
            id,
            labels,
            index,
            edges,
            resolved,
            incidence,
        })
    }

    /// Creates a graph with `n` nodes labelled `{prefix}0, .., {prefix}{n-1}` from edges given
    /// as `(u, v, weight)` over node indices.
    /// ** Panics if an endpoint is `>= n` **
    pub fn with_numbered_nodes<E>(id: GraphId, n: NumNodes, prefix: &str, edges: E) -> Self
    where
        E: IntoIterator<Item = (Node, Node, Weight)>,
    {
        let labels: Vec<Label> = (0..n).map(|u| Label::new(format!("{prefix}{u}"))).collect();
        let index = labels
            .iter()
            .enumerate()
            .map(|(u, label)| (label.clone(), u as Node))
            .collect();

        let mut resolved = Vec::new();
        let mut plain = Vec::new();
        let mut incidence = vec![Incidence::new(); n as usize];
        for (i, (u, v, weight)) in edges.into_iter().enumerate() {
            assert!(u < n && v < n, "edge ({u},{v}) exceeds {n} nodes");
            let edge = WeightedEdge {
                u,
                v,
                weight,
                id: i as EdgeId,
            };

            attach(&mut incidence, edge);
            resolved.push(edge);
            plain.push(Edge::new(&labels[u as usize], &labels[v as usize], weight));
        }

        Self {
            id,
            labels,
            index,
            edges: plain,
            resolved,
            incidence,
        }
    }

    /// Creates a graph without nodes and edges
    pub fn empty(id: GraphId) -> Self {
        Self {
            id,
            labels: Vec::new(),
            index: FxHashMap::default(),
            edges: Vec::new(),
            resolved: Vec::new(),
            incidence: Vec::new(),
        }
    }

    /// Returns the identifier of the graph
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Returns the node labels in declaration order
    pub fn nodes(&self) -> &[Label] {
        &self.labels
    }

    /// Returns the edges in input order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the input edge with the given id
    /// ** Panics if `id >= m` **
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id as usize]
    }

    /// Number of declared nodes
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns *true* if the graph has an edge of the given weight between the endpoints of
    /// `edge`, in any orientation
    pub fn contains_edge(&self, edge: &Edge) -> bool {
        let (Some(u), Some(v)) = (self.node_of(edge.from.as_str()), self.node_of(edge.to.as_str()))
        else {
            return false;
        };

        self.incident_weighted_edges_of(u)
            .any(|e| e.weight == edge.weight && e.other(u) == v)
    }

    /// Returns the first declared node, if any
    pub fn first_node(&self) -> Option<Node> {
        (!self.labels.is_empty()).then_some(0)
    }
}

/// Registers `edge` with its endpoints; loops are listed once
fn attach(incidence: &mut [Incidence], edge: WeightedEdge) {
    incidence[edge.u as usize].push(edge.id);
    if !edge.is_loop() {
        incidence[edge.v as usize].push(edge.id);
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl WeightedAdjacency for Graph {
    fn edge_at(&self, id: EdgeId) -> WeightedEdge {
        self.resolved[id as usize]
    }

    fn incident_edges_of(&self, u: Node) -> &[EdgeId] {
        &self.incidence[u as usize]
    }
}

impl LabelledNodes for Graph {
    fn label_of(&self, u: Node) -> &Label {
        &self.labels[u as usize]
    }

    fn node_of(&self, label: &str) -> Option<Node> {
        self.index.get(label).copied()
    }
}
