//! Graph abstractions consumed by the search engines.
//!
//! A [`GraphView`] exposes, for any node, its traversable neighbors and the
//! edge weight to reach each. The engines never mutate a graph; callers
//! construct one, hand out a shared reference, and keep ownership.

use crate::search::SearchError;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// An opaque node identifier. Nothing beyond equality and hashing is assumed,
/// so grid cells, vertex labels and integer ids all qualify.
pub trait Node: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Node for T {}

/// Neighbor list returned by [`GraphView::neighbors`]. Grid nodes have at
/// most eight neighbors, so the common case stays on the stack.
pub type Neighbors<N> = SmallVec<[(N, f64); 8]>;

/// Read-only view of a graph: for any node, the traversable neighbors and
/// the non-negative weight of the edge to each.
///
/// Implementations must be deterministic (the same node always yields its
/// neighbors in the same order) so that tie-breaking in the frontier stays
/// reproducible across runs.
pub trait GraphView {
    type Node: Node;

    fn neighbors(&self, node: &Self::Node) -> Neighbors<Self::Node>;

    /// Check that `node` is usable as a search endpoint. Graphs without a
    /// notion of invalid nodes accept everything; the grid rejects
    /// out-of-bounds and blocked cells.
    fn validate_endpoint(&self, _node: &Self::Node) -> Result<(), SearchError> {
        Ok(())
    }
}

/// A graph that can also be traversed against the edge direction.
///
/// Bidirectional search expands from the goal via reverse edges; on a
/// directed graph that requires an explicit reverse-neighbor accessor, so
/// the capability is a distinct trait rather than an assumption. The
/// implementations in this crate store (grid) or maintain (adjacency list)
/// exact reverse adjacency.
pub trait ReverseGraphView: GraphView {
    fn reverse_neighbors(&self, node: &Self::Node) -> Neighbors<Self::Node>;
}

/// Explicit weighted adjacency-list graph.
///
/// Edges are stored per-node in insertion order, which fixes the neighbor
/// order seen by the engines. A reverse adjacency table is maintained
/// alongside the forward one so the graph supports [`ReverseGraphView`]
/// even when built with directed edges.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph<N> {
    forward: HashMap<N, Vec<(N, f64)>>,
    reverse: HashMap<N, Vec<(N, f64)>>,
}

impl<N: Node> AdjacencyGraph<N> {
    pub fn new() -> Self {
        Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
        }
    }

    /// Add a directed edge. Fails on negative weights; zero is allowed.
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) -> Result<(), SearchError> {
        if weight < 0.0 {
            return Err(SearchError::NegativeWeight(weight));
        }
        self.forward
            .entry(from.clone())
            .or_default()
            .push((to.clone(), weight));
        self.reverse.entry(to).or_default().push((from, weight));
        Ok(())
    }

    /// Add an edge traversable in both directions.
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: f64) -> Result<(), SearchError> {
        self.add_edge(a.clone(), b.clone(), weight)?;
        self.add_edge(b, a, weight)
    }
}

impl<N: Node> GraphView for AdjacencyGraph<N> {
    type Node = N;

    fn neighbors(&self, node: &N) -> Neighbors<N> {
        self.forward
            .get(node)
            .map(|edges| edges.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl<N: Node> ReverseGraphView for AdjacencyGraph<N> {
    fn reverse_neighbors(&self, node: &N) -> Neighbors<N> {
        self.reverse
            .get(node)
            .map(|edges| edges.iter().cloned().collect())
            .unwrap_or_default()
    }
}
