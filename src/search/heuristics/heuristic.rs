use crate::search::grid::Cell;
use crate::search::heuristics::{EuclideanDistance, ManhattanDistance, ZeroHeuristic};
use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

/// An estimate of the remaining cost from a node to the goal.
///
/// Heuristic-guided search is only guaranteed to return an optimal path when
/// the estimate is admissible (never an overestimate of the true remaining
/// cost). Admissibility is the caller's responsibility; with an inadmissible
/// heuristic the search still finds a path to any reachable goal, just not
/// necessarily the cheapest one.
pub trait Heuristic<N>: Debug {
    fn estimate(&self, node: &N, goal: &N) -> HeuristicValue;
}

impl<N> Heuristic<N> for Box<dyn Heuristic<N>> {
    fn estimate(&self, node: &N, goal: &N) -> HeuristicValue {
        (**self).estimate(node, goal)
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum GridHeuristicName {
    #[clap(help = "Manhattan distance, admissible for 4-connected movement.")]
    Manhattan,
    #[clap(help = "Euclidean distance, for 8-connected movement. Not \
        admissible under unit-cost diagonal steps, so the path found is not \
        guaranteed to be the cheapest.")]
    Euclidean,
    #[clap(help = "The zero heuristic; degrades to uniform-cost search.")]
    Zero,
}

impl GridHeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic<Cell>> {
        match self {
            GridHeuristicName::Manhattan => Box::new(ManhattanDistance),
            GridHeuristicName::Euclidean => Box::new(EuclideanDistance),
            GridHeuristicName::Zero => Box::new(ZeroHeuristic),
        }
    }
}
