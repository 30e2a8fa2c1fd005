use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

use crate::{Label, Node};

/// Edge weights are plain integers. Negative weights are not supported.
pub type Weight = i64;

/// Sum of edge weights
pub type Cost = i64;

/// Position of an edge in the graph's edge sequence
pub type EdgeId = u32;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// An undirected, weighted edge between two labelled nodes.
///
/// `Edge { from: A, to: B, .. }` and `Edge { from: B, to: A, .. }` connect the same nodes;
/// the orientation given on input is kept as is and never normalized.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: Label,
    pub to: Label,
    pub weight: Weight,
}

impl Edge {
    /// Creates a new edge
    pub fn new<A: Into<Label>, B: Into<Label>>(from: A, to: B, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Returns *true* if the edge connects `a` and `b` (in any orientation)
    pub fn connects(&self, a: &Label, b: &Label) -> bool {
        (self.from == *a && self.to == *b) || (self.from == *b && self.to == *a)
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({})", self.from, self.to, self.weight)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<A: Into<Label>, B: Into<Label>> From<(A, B, Weight)> for Edge {
    fn from(value: (A, B, Weight)) -> Self {
        Edge::new(value.0, value.1, value.2)
    }
}

/// An edge whose endpoints are resolved to node indices.
///
/// `id` is the position of the corresponding [`Edge`] in the graph, which is how the engines
/// map their selection back to the input edges.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge {
    pub u: Node,
    pub v: Node,
    pub weight: Weight,
    pub id: EdgeId,
}

impl WeightedEdge {
    /// Returns the endpoint opposite to `node`.
    ///
    /// `node` has to be one of the two endpoints.
    pub fn other(&self, node: Node) -> Node {
        debug_assert!(node == self.u || node == self.v);
        self.u ^ self.v ^ node
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.u == self.v
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.u, self.v, self.weight)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}
