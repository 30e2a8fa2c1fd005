use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in declaration order.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Getters for weighted, index-resolved edges and incidences
pub trait WeightedAdjacency: GraphNodeOrder + GraphEdgeOrder {
    /// Returns the index-resolved edge with the given id.
    /// ** Panics if `id >= m` **
    fn edge_at(&self, id: EdgeId) -> WeightedEdge;

    /// Returns an iterator over all index-resolved edges in input order
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        (0..self.number_of_edges()).map(|id| self.edge_at(id))
    }

    /// Returns the ids of all edges incident to `u`; loops are listed once.
    /// ** Panics if `u >= n` **
    fn incident_edges_of(&self, u: Node) -> &[EdgeId];

    /// Returns an iterator over all edges incident to `u`
    /// ** Panics if `u >= n` **
    fn incident_weighted_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.incident_edges_of(u)
            .iter()
            .map(|&id| self.edge_at(id))
    }

    /// Returns the number of incident edges of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumEdges {
        self.incident_edges_of(u).len() as NumEdges
    }

    /// Returns the total weight of all edges
    fn total_weight(&self) -> Cost {
        self.weighted_edges().map(|e| e.weight).sum()
    }
}

/// Translation between external labels and internal nodes
pub trait LabelledNodes: GraphNodeOrder {
    /// Returns the label of node `u`
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> &Label;

    /// Returns the node of the given label if it was declared
    fn node_of(&self, label: &str) -> Option<Node>;
}
