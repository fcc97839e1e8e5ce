mod grid_distance;
mod heuristic;
mod zero_heuristic;

pub use grid_distance::{EuclideanDistance, ManhattanDistance};
pub use heuristic::{GridHeuristicName, Heuristic, HeuristicValue};
pub use zero_heuristic::ZeroHeuristic;
