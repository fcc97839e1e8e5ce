//! Distance estimates between grid cells.

use crate::search::grid::Cell;
use crate::search::heuristics::{Heuristic, HeuristicValue};

fn axis_delta(a: usize, b: usize) -> f64 {
    a.abs_diff(b) as f64
}

/// |Δrow| + |Δcol|. Admissible for 4-connected unit-cost movement.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanDistance;

impl Heuristic<Cell> for ManhattanDistance {
    fn estimate(&self, node: &Cell, goal: &Cell) -> HeuristicValue {
        (axis_delta(node.row, goal.row) + axis_delta(node.col, goal.col)).into()
    }
}

/// Straight-line distance, used with 8-connected movement. Diagonal steps
/// cost 1 here, so this can overestimate and optimality is not guaranteed.
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanDistance;

impl Heuristic<Cell> for EuclideanDistance {
    fn estimate(&self, node: &Cell, goal: &Cell) -> HeuristicValue {
        let dr = axis_delta(node.row, goal.row);
        let dc = axis_delta(node.col, goal.col);
        (dr * dr + dc * dc).sqrt().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn manhattan_sums_axis_deltas() {
        let h = ManhattanDistance;
        assert_eq!(
            h.estimate(&Cell::new(0, 0), &Cell::new(4, 4)),
            HeuristicValue::from(8.0)
        );
        assert_eq!(
            h.estimate(&Cell::new(4, 4), &Cell::new(0, 0)),
            HeuristicValue::from(8.0)
        );
        assert_eq!(
            h.estimate(&Cell::new(2, 2), &Cell::new(2, 2)),
            HeuristicValue::from(0.0)
        );
    }

    #[test]
    fn euclidean_is_the_straight_line() {
        let h = EuclideanDistance;
        let estimate = h.estimate(&Cell::new(0, 0), &Cell::new(3, 4));
        assert_approx_eq!(estimate.into_inner(), 5.0);
    }

    #[test]
    fn zero_estimates_nothing() {
        use crate::search::heuristics::ZeroHeuristic;
        let h = ZeroHeuristic;
        assert_eq!(
            h.estimate(&Cell::new(0, 0), &Cell::new(9, 9)),
            HeuristicValue::from(0.0)
        );
    }
}
