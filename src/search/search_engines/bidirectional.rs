//! Meet-in-the-middle bidirectional search.
//!
//! Two breadth-first searches run in lockstep, one rooted at the start
//! expanding forward edges and one rooted at the goal expanding reverse
//! edges, alternating one full frontier layer at a time so the two stay
//! balanced. The first node recorded as visited by both sides is the
//! meeting node, and the path is spliced from the two parent chains.
//!
//! Both sides expand uniformly by hop count, so the spliced path is only
//! guaranteed shortest on unweighted graphs; edge weights are ignored and
//! the reported cost is the hop count. Weighted bidirectional search needs
//! a termination condition comparing the best path so far against the sum
//! of both frontiers' minimum priorities, and is an extension point rather
//! than something this engine approximates.

use crate::search::graph::{Node, ReverseGraphView};
use crate::search::path::reconstruct;
use crate::search::search_engines::{SearchEngine, SearchResult, SearchStatistics};
use crate::search::state::SearchState;
use crate::search::SearchError;

/// Double breadth-first search for unweighted graphs. Requires a
/// [`ReverseGraphView`] so the goal side can traverse edges backwards;
/// plain [`GraphView`](crate::search::GraphView)s are rejected by the type
/// system instead of being silently treated as undirected.
#[derive(Debug, Clone, Copy, Default)]
pub struct BidirectionalEngine;

impl BidirectionalEngine {
    pub fn new() -> Self {
        Self
    }
}

impl<G: ReverseGraphView> SearchEngine<G> for BidirectionalEngine {
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

        let mut forward = SearchState::new();
        let mut backward = SearchState::new();
        forward.record(start.clone(), 0.0, None);
        backward.record(goal.clone(), 0.0, None);
        let mut forward_layer = vec![start.clone()];
        let mut backward_layer = vec![goal.clone()];

        // A path exists iff the searches meet before either frontier
        // empties.
        while !forward_layer.is_empty() && !backward_layer.is_empty() {
            forward_layer = expand_layer(graph, &mut forward, &forward_layer, false, &mut statistics);
            if let Some(meeting) = first_meeting(&forward_layer, &backward) {
                let result = splice(&forward, &backward, meeting)?;
                statistics.finalise_search();
                return Ok((result, statistics));
            }

            backward_layer =
                expand_layer(graph, &mut backward, &backward_layer, true, &mut statistics);
            if let Some(meeting) = first_meeting(&backward_layer, &forward) {
                let result = splice(&forward, &backward, meeting)?;
                statistics.finalise_search();
                return Ok((result, statistics));
            }
        }

        statistics.finalise_search();
        Ok((SearchResult::NotFound, statistics))
    }
}

/// Expand every node of `layer` and return the next layer: the neighbors
/// seen for the first time by this side, in discovery order.
fn expand_layer<G: ReverseGraphView>(
    graph: &G,
    state: &mut SearchState<G::Node>,
    layer: &[G::Node],
    reverse: bool,
    statistics: &mut SearchStatistics,
) -> Vec<G::Node> {
    let mut next = Vec::new();
    for node in layer {
        statistics.increment_expanded_nodes();
        let depth = state.cost(node).expect("layer nodes are always visited") + 1.0;
        let neighbors = if reverse {
            graph.reverse_neighbors(node)
        } else {
            graph.neighbors(node)
        };
        for (neighbor, _) in neighbors {
            if !state.visited(&neighbor) {
                state.record(neighbor.clone(), depth, Some(node.clone()));
                statistics.increment_generated_nodes();
                next.push(neighbor);
            }
        }
    }
    next
}

/// First node of the freshly expanded layer that the other side has also
/// recorded as visited. Checking only newly visited nodes keeps the meeting
/// node from being reported before both sides know it.
fn first_meeting<'a, N: Node>(layer: &'a [N], other: &SearchState<N>) -> Option<&'a N> {
    layer.iter().find(|node| other.visited(node))
}

/// Concatenate the start-side chain (reversed into start-to-meeting order)
/// with the goal-side chain walked meeting-to-goal, without duplicating the
/// meeting node. Cost is the hop count.
fn splice<N: Node>(
    forward: &SearchState<N>,
    backward: &SearchState<N>,
    meeting: &N,
) -> Result<SearchResult<N>, SearchError> {
    let mut path = reconstruct(forward.parents(), meeting)?;
    let mut current = meeting;
    while let Some(parent) = backward.parents().get(current) {
        if path.len() > forward.parents().len() + backward.parents().len() + 1 {
            return Err(SearchError::BrokenChain(format!("{current:?}")));
        }
        path.push(parent.clone());
        current = parent;
    }
    let cost = (path.len() - 1) as f64;
    Ok(SearchResult::Found { path, cost })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::graph::{AdjacencyGraph, GraphView};
    use crate::search::grid::{Cell, Connectivity};
    use crate::search::search_engines::BestFirstEngine;
    use crate::test_utils::{maze_grid, MAZE_GOAL, MAZE_START};
    use itertools::Itertools;

    fn found_path<N: Clone>(result: &SearchResult<N>) -> (Vec<N>, f64) {
        match result {
            SearchResult::Found { path, cost } => (path.clone(), *cost),
            SearchResult::NotFound => panic!("expected a path"),
        }
    }

    #[test]
    fn matches_breadth_first_length_on_the_maze() {
        let grid = maze_grid(Connectivity::Four);
        let (unidirectional, _) = BestFirstEngine::breadth_first()
            .search(&grid, &MAZE_START, &MAZE_GOAL)
            .unwrap();
        let (bidirectional, _) = BidirectionalEngine::new()
            .search(&grid, &MAZE_START, &MAZE_GOAL)
            .unwrap();

        let (expected, _) = found_path(&unidirectional);
        let (path, cost) = found_path(&bidirectional);
        assert_eq!(path.len(), expected.len());
        assert_eq!(cost, (path.len() - 1) as f64);
        assert_eq!(path.first(), Some(&MAZE_START));
        assert_eq!(path.last(), Some(&MAZE_GOAL));

        for (a, b) in path.iter().tuple_windows() {
            assert!(grid.neighbors(a).iter().any(|(cell, _)| cell == b));
        }
    }

    #[test]
    fn meeting_splices_without_duplicates() {
        let mut graph = AdjacencyGraph::new();
        for (a, b) in [("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")] {
            graph.add_undirected_edge(a, b, 1.0).unwrap();
        }

        let (result, _) = BidirectionalEngine::new()
            .search(&graph, &"a", &"e")
            .unwrap();
        let (path, cost) = found_path(&result);
        assert_eq!(path, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(cost, 4.0);
    }

    #[test]
    fn directed_graph_uses_the_reverse_accessor() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("a", "b", 1.0).unwrap();
        graph.add_edge("b", "c", 1.0).unwrap();
        graph.add_edge("c", "d", 1.0).unwrap();

        let (result, _) = BidirectionalEngine::new()
            .search(&graph, &"a", &"d")
            .unwrap();
        assert_eq!(found_path(&result).0, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn start_equals_goal_is_a_single_node_path() {
        let grid = maze_grid(Connectivity::Four);
        let (result, _) = BidirectionalEngine::new()
            .search(&grid, &MAZE_START, &MAZE_START)
            .unwrap();
        assert_eq!(result, SearchResult::single(MAZE_START));
    }

    #[test]
    fn disconnected_components_are_not_found() {
        let mut graph = AdjacencyGraph::new();
        graph.add_undirected_edge("a", "b", 1.0).unwrap();
        graph.add_undirected_edge("x", "y", 1.0).unwrap();

        let (result, _) = BidirectionalEngine::new()
            .search(&graph, &"a", &"y")
            .unwrap();
        assert_eq!(result, SearchResult::NotFound);
    }

    #[test]
    fn blocked_endpoint_is_rejected() {
        let grid = maze_grid(Connectivity::Four);
        assert!(matches!(
            BidirectionalEngine::new().search(&grid, &Cell::new(0, 1), &MAZE_GOAL),
            Err(SearchError::InvalidEndpoint(_))
        ));
    }
}
