use crate::search::graph::GraphView;
use crate::search::search_engines::SearchStatistics;
use crate::search::SearchError;
use clap;

/// Outcome of a completed search. An unreachable goal is a normal outcome,
/// not an error: disconnected graphs and walled-off mazes are expected
/// inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<N> {
    /// A path was found. `path` runs from start to goal inclusive and `cost`
    /// is the sum of the traversed edge weights.
    Found { path: Vec<N>, cost: f64 },
    /// The search space was exhausted without reaching the goal.
    NotFound,
}

impl<N> SearchResult<N> {
    /// The result for `start == goal`: a single-node path with cost 0.
    pub fn single(node: N) -> Self {
        SearchResult::Found {
            path: vec![node],
            cost: 0.0,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found { .. })
    }
}

/// A search engine takes a read-only graph plus start and goal nodes and
/// runs to completion; all per-run state lives inside the call.
pub trait SearchEngine<G: GraphView> {
    fn search(
        &mut self,
        graph: &G,
        start: &G::Node,
        goal: &G::Node,
    ) -> Result<(SearchResult<G::Node>, SearchStatistics), SearchError>;
}

/// Frontier ordering of the unified best-first loop. Resolved into a
/// priority function once per search call, not re-checked per iteration.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum Strategy {
    /// Constant priority; the frontier degenerates to a FIFO queue.
    BreadthFirst,
    /// Priority is the accumulated cost from the start.
    UniformCost,
    /// Priority is accumulated cost plus the heuristic estimate to the goal.
    Heuristic,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    BreadthFirst,
    UniformCost,
    Heuristic,
    /// Meet-in-the-middle double breadth-first search. Unweighted; needs a
    /// graph with a reverse-neighbor accessor.
    Bidirectional,
}
