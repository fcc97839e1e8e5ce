//! Parent-chain path reconstruction.

use crate::search::graph::Node;
use crate::search::SearchError;
use std::collections::HashMap;

/// Walk parent pointers from `terminal` back to the root (the node with no
/// parent), then reverse into a root-to-terminal path.
///
/// The walk is bounded by the size of the parent map; exceeding it means the
/// chain loops, which the bookkeeping invariants rule out, so it is reported
/// as [`SearchError::BrokenChain`] rather than looping forever.
pub fn reconstruct<N: Node>(parents: &HashMap<N, N>, terminal: &N) -> Result<Vec<N>, SearchError> {
    let mut path = vec![terminal.clone()];
    let mut current = terminal;
    while let Some(parent) = parents.get(current) {
        if path.len() > parents.len() {
            return Err(SearchError::BrokenChain(format!("{current:?}")));
        }
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstructs_in_root_to_terminal_order() {
        let parents = HashMap::from([("d", "c"), ("c", "b"), ("b", "a")]);
        assert_eq!(reconstruct(&parents, &"d").unwrap(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn root_reconstructs_to_itself() {
        let parents: HashMap<&str, &str> = HashMap::new();
        assert_eq!(reconstruct(&parents, &"root").unwrap(), vec!["root"]);
    }

    #[test]
    fn cycle_is_reported_as_broken_chain() {
        let parents = HashMap::from([("a", "b"), ("b", "a")]);
        assert!(matches!(
            reconstruct(&parents, &"a"),
            Err(SearchError::BrokenChain(_))
        ));
    }
}
