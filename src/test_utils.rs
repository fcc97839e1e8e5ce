//! Shared fixtures for the in-module tests.

use crate::search::{AdjacencyGraph, Cell, Connectivity, Grid};

/// The 5×5 maze used throughout the engine tests. `#` cells are obstacles:
/// (0,1), (1,1), (1,3), (2,3), (3,1) and (4,3).
pub const MAZE_5X5: &str = "\
.#...
.#.#.
...#.
.#...
...#.
";

pub const MAZE_START: Cell = Cell { row: 0, col: 0 };
pub const MAZE_GOAL: Cell = Cell { row: 4, col: 4 };

pub fn maze_grid(connectivity: Connectivity) -> Grid {
    Grid::from_map_text(MAZE_5X5, connectivity).expect("fixture map is well formed")
}

/// The weighted diamond A–B(1), A–C(4), B–C(2), B–D(5), C–D(1). The cheapest
/// route from A to D is A, B, C, D at cost 4.
pub fn weighted_diamond() -> AdjacencyGraph<&'static str> {
    let mut graph = AdjacencyGraph::new();
    graph.add_undirected_edge("A", "B", 1.0).unwrap();
    graph.add_undirected_edge("A", "C", 4.0).unwrap();
    graph.add_undirected_edge("B", "C", 2.0).unwrap();
    graph.add_undirected_edge("B", "D", 5.0).unwrap();
    graph.add_undirected_edge("C", "D", 1.0).unwrap();
    graph
}
