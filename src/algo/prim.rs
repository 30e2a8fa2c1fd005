use std::{cmp::Reverse, collections::BinaryHeap, time::Instant};

use bitvec::prelude::*;
use tracing::{debug, trace};

use super::{mst::elapsed_ms, *};

/// Frontier entries are ordered by weight, ties by edge id (ie. input order)
type Frontier = BinaryHeap<Reverse<(Weight, EdgeId)>>;

/// Prim's algorithm: grows a single tree from a start node by repeatedly taking the lightest
/// edge leaving the tree.
///
/// The frontier is a lazy binary heap: edges whose far endpoint joined the tree after they were
/// pushed stay in the heap and are discarded when popped. If the heap runs dry before all nodes
/// are reached, the graph is disconnected and the result only spans the start node's component.
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
/// let result = Prim::new().find_mst(&graph).unwrap();
/// assert_eq!(result.total_cost(), 6);
/// assert_eq!(result.number_of_edges(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Prim {
    start: Option<Label>,
}

impl Prim {
    pub const NAME: &'static str = "Prim";

    /// Creates an engine starting at the first declared node
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node the tree is grown from
    pub fn set_start<L: Into<Label>>(&mut self, start: L) {
        self.start = Some(start.into());
    }

    /// Sets the node the tree is grown from
    pub fn start<L: Into<Label>>(mut self, start: L) -> Self {
        self.set_start(start);
        self
    }
}

impl MstAlgorithm for Prim {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn find_mst(&self, graph: &Graph) -> Result<MstResult, LookupError> {
        let timer = Instant::now();

        let start = match &self.start {
            Some(label) => Some(graph.node_of(label.as_str()).ok_or_else(|| LookupError {
                key: format!("{label:?}"),
            })?),
            None => graph.first_node(),
        };

        let Some(start) = start else {
            return Ok(MstResult::new(Vec::new(), 0, elapsed_ms(timer)));
        };

        let (selected, ops) = PrimSearch::new(graph).compute(start);

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
            "prim finished"
        );

        Ok(result)
    }
}

struct PrimSearch<'a> {
    graph: &'a Graph,
    in_tree: BitVec,
    tree_size: NumNodes,
    frontier: Frontier,
    ops: OperationCounter,
}

impl<'a> PrimSearch<'a> {
    fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            in_tree: bitvec![0; graph.len()],
            tree_size: 0,
            frontier: Frontier::with_capacity(graph.number_of_edges() as usize),
            ops: OperationCounter::default(),
        }
    }

    fn compute(mut self, start: Node) -> (Vec<EdgeId>, OperationCounter) {
        let n = self.graph.number_of_nodes();
        let mut selected = Vec::with_capacity(n.saturating_sub(1) as usize);

        self.join(start);

        while self.tree_size < n {
            self.ops.add(sift_operations(self.frontier.len()));
            let Some(Reverse((_, id))) = self.frontier.pop() else {
                trace!(graph = self.graph.id(), "frontier exhausted");
                break;
            };
            self.ops.tick();

            let Some(new_node) = self.outside_endpoint(id) else {
                trace!(edge = id, "discard stale frontier edge");
                continue;
            };

            selected.push(id);
            self.ops.add(2);
            self.join(new_node);
        }

        (selected, self.ops)
    }

    /// Returns the endpoint of edge `id` that is not in the tree, if exactly one is
    fn outside_endpoint(&mut self, id: EdgeId) -> Option<Node> {
        self.ops.tick();
        let edge = self.graph.edge_at(id);
        match (self.in_tree[edge.u as usize], self.in_tree[edge.v as usize]) {
            (true, false) => Some(edge.v),
            (false, true) => Some(edge.u),
            _ => None,
        }
    }

    /// Adds `u` to the tree and pushes all its edges leading out of the tree
    fn join(&mut self, u: Node) {
        self.in_tree.set(u as usize, true);
        self.tree_size += 1;
        self.ops.tick();

        for edge in self.graph.incident_weighted_edges_of(u) {
            self.ops.tick();
            if !self.in_tree[edge.other(u) as usize] {
                self.frontier.push(Reverse((edge.weight, edge.id)));
                self.ops.add(sift_operations(self.frontier.len()));
            }
        }
    }
}

/// Estimated sift steps of a push or pop on a heap holding `len` entries:
/// `floor(log2(len + 1)) + 1`
fn sift_operations(len: usize) -> u64 {
    (len as u64 + 1).ilog2() as u64 + 1
}
