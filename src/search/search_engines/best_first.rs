//! The unified best-first search loop.
//!
//! Breadth-first, uniform-cost and heuristic-guided search are one algorithm
//! with different frontier priorities, so they share this single loop and
//! differ only in the [`Strategy`] it is configured with. This rules out the
//! divergence bugs that three hand-maintained copies of the loop invite.

use crate::search::frontier::Frontier;
use crate::search::graph::GraphView;
use crate::search::heuristics::{Heuristic, HeuristicValue, ZeroHeuristic};
use crate::search::path::reconstruct;
use crate::search::search_engines::{SearchEngine, SearchResult, SearchStatistics, Strategy};
use crate::search::state::SearchState;
use crate::search::SearchError;

/// Best-first search over any [`GraphView`], parameterized by a
/// [`Strategy`] and, for [`Strategy::Heuristic`], a heuristic.
#[derive(Debug, Clone)]
pub struct BestFirstEngine<H = ZeroHeuristic> {
    strategy: Strategy,
    heuristic: H,
}

impl BestFirstEngine<ZeroHeuristic> {
    pub fn breadth_first() -> Self {
        Self::new(Strategy::BreadthFirst, ZeroHeuristic)
    }

    pub fn uniform_cost() -> Self {
        Self::new(Strategy::UniformCost, ZeroHeuristic)
    }
}

impl<H> BestFirstEngine<H> {
    pub fn new(strategy: Strategy, heuristic: H) -> Self {
        Self {
            strategy,
            heuristic,
        }
    }

    pub fn heuristic_guided(heuristic: H) -> Self {
        Self::new(Strategy::Heuristic, heuristic)
    }
}

impl<G, H> SearchEngine<G> for BestFirstEngine<H>
where
    G: GraphView,
    H: Heuristic<G::Node>,
{
    fn search(
        &mut self,
        graph: &G,
        start: &G::Node,
        goal: &G::Node,
    ) -> Result<(SearchResult<G::Node>, SearchStatistics), SearchError> {
        graph.validate_endpoint(start)?;
        graph.validate_endpoint(goal)?;
        let mut statistics = SearchStatistics::new();

        if start == goal {
            statistics.finalise_search();
            return Ok((SearchResult::single(start.clone()), statistics));
        }

        // Resolve the strategy into a priority function once, before the
        // loop runs.
        let heuristic = &self.heuristic;
        let priority: Box<dyn Fn(f64, &G::Node) -> HeuristicValue + '_> = match self.strategy {
            Strategy::BreadthFirst => Box::new(|_, _| HeuristicValue::from(0.0)),
            Strategy::UniformCost => Box::new(|cost, _| HeuristicValue::from(cost)),
            Strategy::Heuristic => Box::new(move |cost, node| {
                HeuristicValue::from(cost) + heuristic.estimate(node, goal)
            }),
        };

        let mut state = SearchState::new();
        let mut frontier = Frontier::new();
        state.record(start.clone(), 0.0, None);
        frontier.push(priority(0.0, start), start.clone());

        while !frontier.is_empty() {
            let (popped_priority, current) = frontier.pop_min()?;
            let current_cost = state
                .cost(&current)
                .expect("frontier nodes always have a recorded cost");

            // Lazy deletion: the entry was superseded by a cheaper
            // rediscovery after it was pushed.
            if popped_priority > priority(current_cost, &current) {
                statistics.increment_pruned_entries();
                continue;
            }

            if current == *goal {
                let path = reconstruct(state.parents(), &current)?;
                statistics.finalise_search();
                return Ok((
                    SearchResult::Found {
                        path,
                        cost: current_cost,
                    },
                    statistics,
                ));
            }

            statistics.increment_expanded_nodes();
            for (neighbor, weight) in graph.neighbors(&current) {
                let candidate = current_cost + weight;
                if state.improves(&neighbor, candidate) {
                    if state.visited(&neighbor) {
                        statistics.increment_reopened_nodes();
                    } else {
                        statistics.increment_generated_nodes();
                    }
                    frontier.push(priority(candidate, &neighbor), neighbor.clone());
                    state.record(neighbor, candidate, Some(current.clone()));
                }
            }
        }

        statistics.finalise_search();
        Ok((SearchResult::NotFound, statistics))
    }
}
