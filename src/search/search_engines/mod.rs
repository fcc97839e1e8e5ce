mod best_first;
mod bidirectional;
mod search_engine;
mod search_statistics;

pub use best_first::BestFirstEngine;
pub use bidirectional::BidirectionalEngine;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult, Strategy};
pub use search_statistics::SearchStatistics;
