/*!
# Minimum Spanning Trees

Common vocabulary of the MST engines: the [`MstResult`] they produce, the
[`OperationCounter`] they use for instrumentation and the [`MstAlgorithm`] trait.

Engines are plain configuration structs without state between calls. Every call of
[`MstAlgorithm::find_mst`] allocates its own frontier / disjoint-set structures, starts counting
operations at zero and measures its own wall-clock time.
*/

use std::{fmt, str::FromStr, time::Instant};

use serde::{Deserialize, Serialize};

use super::*;

/// Monotone counter of primitive steps performed by an engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct OperationCounter(u64);

impl OperationCounter {
    /// Counts a single step
    #[inline]
    pub fn tick(&mut self) {
        self.0 += 1;
    }

    /// Counts `steps` steps
    #[inline]
    pub fn add(&mut self, steps: u64) {
        self.0 += steps;
    }

    /// Number of counted steps
    #[inline]
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Outcome of a single MST computation.
///
/// `mst_edges` are kept in the order the engine selected them. If the graph is disconnected,
/// the result holds fewer than `n - 1` edges (a spanning tree of the explored part for Prim,
/// a spanning forest for Kruskal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstResult {
    mst_edges: Vec<Edge>,
    total_cost: Cost,
    operations_count: u64,
    execution_time_ms: f64,
}

impl MstResult {
    /// Creates a result; the total cost is derived from `mst_edges`
    pub fn new(mst_edges: Vec<Edge>, operations_count: u64, execution_time_ms: f64) -> Self {
        Self {
            total_cost: mst_edges.iter().map(|e| e.weight).sum(),
            mst_edges,
            operations_count,
            execution_time_ms,
        }
    }

    /// Selected edges in selection order
    pub fn mst_edges(&self) -> &[Edge] {
        &self.mst_edges
    }

    /// Sum of the weights of all selected edges
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    /// Number of primitive steps the engine performed
    pub fn operations_count(&self) -> u64 {
        self.operations_count
    }

    /// Wall-clock time of the computation in milliseconds
    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time_ms
    }

    /// Number of selected edges
    pub fn number_of_edges(&self) -> usize {
        self.mst_edges.len()
    }

    /// Returns *true* if the selected edges form a spanning tree of `graph`:
    /// exactly `n - 1` edges of the graph that do not close a cycle.
    pub fn is_spanning_tree_of(&self, graph: &Graph) -> bool {
        if self.mst_edges.len() + 1 != graph.vertex_count().max(1) {
            return false;
        }

        let mut uf = UnionFind::new(graph.nodes().iter().cloned());
        self.mst_edges.iter().all(|e| {
            graph.contains_edge(e) && uf.union(&e.from, &e.to).unwrap_or(false)
        })
    }
}

impl fmt::Display for MstResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Total Cost: {}", self.total_cost)?;
        writeln!(f, "  Operations: {}", self.operations_count)?;
        writeln!(f, "  Execution Time: {:.4} ms", self.execution_time_ms)?;
        write!(f, "  MST Edges: {}", self.mst_edges.len())?;
        for edge in &self.mst_edges {
            write!(f, "\n    {edge}")?;
        }
        Ok(())
    }
}

/// An engine computing minimum spanning trees
pub trait MstAlgorithm {
    /// Human readable name of the engine
    fn name(&self) -> &'static str;

    /// Computes a minimum spanning tree of `graph`.
    ///
    /// Empty graphs yield an empty result; disconnected graphs yield fewer than `n - 1` edges.
    ///
    /// # Errors
    /// Returns a [`LookupError`] if the engine is configured with a node the graph does not have.
    fn find_mst(&self, graph: &Graph) -> Result<MstResult, LookupError>;
}

/// Selector for the available engines with default settings
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Prim,
    Kruskal,
}

impl Algorithm {
    /// All engines in reporting order
    pub const ALL: [Algorithm; 2] = [Algorithm::Prim, Algorithm::Kruskal];

    /// Runs the engine with default settings
    pub fn run(self, graph: &Graph) -> Result<MstResult, LookupError> {
        match self {
            Algorithm::Prim => Prim::new().find_mst(graph),
            Algorithm::Kruskal => Kruskal::new().find_mst(graph),
        }
    }

    /// Human readable name of the engine
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Prim => Prim::NAME,
            Algorithm::Kruskal => Kruskal::NAME,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prim" => Ok(Algorithm::Prim),
            "kruskal" => Ok(Algorithm::Kruskal),
            _ => Err(format!("Unknown algorithm: {s}")),
        }
    }
}

/// Shorthand for running the engines with default settings on a graph
pub trait MinimumSpanningTree {
    /// Runs Prim's algorithm starting at the first declared node
    fn prim_mst(&self) -> Result<MstResult, LookupError>;

    /// Runs Kruskal's algorithm
    fn kruskal_mst(&self) -> Result<MstResult, LookupError>;

    /// Runs the given engine
    fn mst_with(&self, algorithm: Algorithm) -> Result<MstResult, LookupError>;
}

impl MinimumSpanningTree for Graph {
    fn prim_mst(&self) -> Result<MstResult, LookupError> {
        self.mst_with(Algorithm::Prim)
    }

    fn kruskal_mst(&self) -> Result<MstResult, LookupError> {
        self.mst_with(Algorithm::Kruskal)
    }

    fn mst_with(&self, algorithm: Algorithm) -> Result<MstResult, LookupError> {
        algorithm.run(self)
    }
}

/// Milliseconds elapsed since `start`
pub(super) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1_000.0
}
