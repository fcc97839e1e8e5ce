use crate::search::heuristics::{Heuristic, HeuristicValue};

/// Estimates every remaining cost as zero, turning heuristic-guided search
/// into uniform-cost search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<N> Heuristic<N> for ZeroHeuristic {
    fn estimate(&self, _node: &N, _goal: &N) -> HeuristicValue {
        (0.).into()
    }
}
