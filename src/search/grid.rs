//! 2-D occupancy grid with implicit edges.
//!
//! Grid edges are derived from a connectivity mode (4 or 8 neighbors) and an
//! obstacle bitmap; every step costs 1, diagonal steps included.

use crate::search::graph::{GraphView, Neighbors, ReverseGraphView};
use crate::search::SearchError;
use std::fmt;
use std::str::FromStr;

/// A grid cell, addressed as (row, col) with the origin in the top-left
/// corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = String;

    /// Parse `"ROW,COL"`, as taken on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
        let row = row.trim().parse().map_err(|e| format!("bad row: {e}"))?;
        let col = col.trim().parse().map_err(|e| format!("bad col: {e}"))?;
        Ok(Self { row, col })
    }
}

/// Movement offsets, cardinal directions first so that 4-connected order is
/// a prefix of 8-connected order: up, down, left, right, then diagonals.
const OFFSETS: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum Connectivity {
    /// Cardinal moves only.
    Four,
    /// Cardinal and diagonal moves.
    Eight,
}

impl Connectivity {
    fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Connectivity::Four => &OFFSETS[..4],
            Connectivity::Eight => &OFFSETS,
        }
    }
}

/// Occupancy grid. Cells are free or blocked; free cells are connected to
/// their free neighbors under the grid's connectivity mode with uniform
/// step cost 1.
#[derive(Debug, Clone)]
pub struct Grid {
    height: usize,
    width: usize,
    connectivity: Connectivity,
    blocked: Vec<bool>,
}

impl Grid {
    /// An empty grid of `height` rows by `width` columns.
    pub fn new(height: usize, width: usize, connectivity: Connectivity) -> Self {
        Self {
            height,
            width,
            connectivity,
            blocked: vec![false; height * width],
        }
    }

    /// Parse a map where each line is a row, `.` is a free cell and `#` is
    /// an obstacle. Rows must be non-empty and of uniform width.
    pub fn from_map_text(text: &str, connectivity: Connectivity) -> Result<Self, SearchError> {
        let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
        if rows.is_empty() {
            return Err(SearchError::MalformedMap("no rows".to_string()));
        }
        let width = rows[0].chars().count();
        let mut grid = Grid::new(rows.len(), width, connectivity);
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(SearchError::MalformedMap(format!(
                    "row {row} has width {}, expected {width}",
                    line.chars().count()
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '.' => {}
                    '#' => grid.set_obstacle(Cell::new(row, col)),
                    other => {
                        return Err(SearchError::MalformedMap(format!(
                            "unexpected character {other:?} at ({row}, {col})"
                        )))
                    }
                }
            }
        }
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.blocked[self.index(cell)]
    }

    pub fn set_obstacle(&mut self, cell: Cell) {
        let index = self.index(cell);
        self.blocked[index] = true;
    }

    pub fn clear_obstacle(&mut self, cell: Cell) {
        let index = self.index(cell);
        self.blocked[index] = false;
    }

    pub fn toggle_obstacle(&mut self, cell: Cell) {
        let index = self.index(cell);
        self.blocked[index] = !self.blocked[index];
    }

    fn index(&self, cell: Cell) -> usize {
        assert!(self.in_bounds(cell), "cell {cell} out of bounds");
        cell.row * self.width + cell.col
    }
}

impl GraphView for Grid {
    type Node = Cell;

    fn neighbors(&self, node: &Cell) -> Neighbors<Cell> {
        let mut neighbors = Neighbors::new();
        for &(dr, dc) in self.connectivity.offsets() {
            let row = node.row as i64 + dr;
            let col = node.col as i64 + dc;
            if row < 0 || col < 0 {
                continue;
            }
            let cell = Cell::new(row as usize, col as usize);
            if self.in_bounds(cell) && !self.is_blocked(cell) {
                neighbors.push((cell, 1.0));
            }
        }
        neighbors
    }

    fn validate_endpoint(&self, node: &Cell) -> Result<(), SearchError> {
        if !self.in_bounds(*node) || self.is_blocked(*node) {
            return Err(SearchError::InvalidEndpoint(node.to_string()));
        }
        Ok(())
    }
}

impl ReverseGraphView for Grid {
    /// Grid adjacency is symmetric: only free cells carry edges, and a step
    /// between two free cells is traversable both ways.
    fn reverse_neighbors(&self, node: &Cell) -> Neighbors<Cell> {
        self.neighbors(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_connected_interior_cell() {
        let grid = Grid::new(3, 3, Connectivity::Four);
        let neighbors: Vec<Cell> = grid
            .neighbors(&Cell::new(1, 1))
            .into_iter()
            .map(|(cell, _)| cell)
            .collect();
        assert_eq!(
            neighbors,
            vec![
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2),
            ]
        );
    }

    #[test]
    fn eight_connected_corner_cell() {
        let grid = Grid::new(3, 3, Connectivity::Eight);
        let neighbors: Vec<Cell> = grid
            .neighbors(&Cell::new(0, 0))
            .into_iter()
            .map(|(cell, _)| cell)
            .collect();
        assert_eq!(
            neighbors,
            vec![Cell::new(1, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
    }

    #[test]
    fn obstacles_are_excluded() {
        let mut grid = Grid::new(3, 3, Connectivity::Four);
        grid.set_obstacle(Cell::new(0, 1));
        grid.set_obstacle(Cell::new(1, 0));
        let neighbors: Vec<Cell> = grid
            .neighbors(&Cell::new(0, 0))
            .into_iter()
            .map(|(cell, _)| cell)
            .collect();
        assert!(neighbors.is_empty());
    }

    #[test]
    fn steps_cost_one_in_both_modes() {
        let grid = Grid::new(3, 3, Connectivity::Eight);
        for (_, weight) in grid.neighbors(&Cell::new(1, 1)) {
            assert_eq!(weight, 1.0);
        }
    }

    #[test]
    fn endpoint_validation() {
        let mut grid = Grid::new(2, 2, Connectivity::Four);
        grid.set_obstacle(Cell::new(1, 1));

        assert!(grid.validate_endpoint(&Cell::new(0, 0)).is_ok());
        assert_eq!(
            grid.validate_endpoint(&Cell::new(5, 0)),
            Err(SearchError::InvalidEndpoint("(5, 0)".to_string()))
        );
        assert_eq!(
            grid.validate_endpoint(&Cell::new(1, 1)),
            Err(SearchError::InvalidEndpoint("(1, 1)".to_string()))
        );
    }

    #[test]
    fn toggle_obstacle_flips_state() {
        let mut grid = Grid::new(2, 2, Connectivity::Four);
        let cell = Cell::new(0, 1);
        grid.toggle_obstacle(cell);
        assert!(grid.is_blocked(cell));
        grid.toggle_obstacle(cell);
        assert!(!grid.is_blocked(cell));
    }

    #[test]
    fn parse_map_text() {
        let grid = Grid::from_map_text("..#\n...\n#..\n", Connectivity::Four).unwrap();
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 3);
        assert!(grid.is_blocked(Cell::new(0, 2)));
        assert!(grid.is_blocked(Cell::new(2, 0)));
        assert!(!grid.is_blocked(Cell::new(1, 1)));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let result = Grid::from_map_text("..\n...\n", Connectivity::Four);
        assert!(matches!(result, Err(SearchError::MalformedMap(_))));
    }

    #[test]
    fn parse_rejects_unknown_characters() {
        let result = Grid::from_map_text("..\n.x\n", Connectivity::Four);
        assert!(matches!(result, Err(SearchError::MalformedMap(_))));
    }

    #[test]
    fn parse_cell_from_str() {
        assert_eq!("3,4".parse::<Cell>().unwrap(), Cell::new(3, 4));
        assert_eq!("3, 4".parse::<Cell>().unwrap(), Cell::new(3, 4));
        assert!("34".parse::<Cell>().is_err());
    }
}
