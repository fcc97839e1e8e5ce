use thiserror::Error;

/// Errors surfaced by the search core. An unreachable goal is not an error,
/// it is reported as [`SearchResult::NotFound`](crate::search::SearchResult).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The start or goal node is outside the grid bounds or on an obstacle.
    /// Reported before any search begins.
    #[error("invalid endpoint {0}")]
    InvalidEndpoint(String),

    /// [`Frontier::pop_min`](crate::search::Frontier::pop_min) was called on
    /// an empty frontier. The engines convert exhaustion into `NotFound`, so
    /// this only escapes on direct misuse of the frontier.
    #[error("frontier is empty")]
    EmptyFrontier,

    /// A cycle was detected while walking a parent chain. Parent pointers are
    /// only ever written together with a cost improvement, so a cycle
    /// indicates a bookkeeping bug and should be treated as fatal.
    #[error("parent chain is broken: cycle reached via {0}")]
    BrokenChain(String),

    /// An edge was added with a negative weight.
    #[error("negative edge weight {0}")]
    NegativeWeight(f64),

    /// A grid map file could not be parsed.
    #[error("malformed map: {0}")]
    MalformedMap(String),
}
