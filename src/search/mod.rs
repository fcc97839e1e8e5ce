mod error;
mod frontier;
pub mod graph;
pub mod grid;
pub mod heuristics;
mod path;
pub mod search_engines;
mod state;

pub use error::SearchError;
pub use frontier::Frontier;
pub use graph::{AdjacencyGraph, GraphView, Neighbors, Node, ReverseGraphView};
pub use grid::{Cell, Connectivity, Grid};
pub use heuristics::{Heuristic, HeuristicValue};
pub use path::reconstruct;
pub use search_engines::{SearchEngine, SearchResult};
pub use state::SearchState;
