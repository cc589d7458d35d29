//! Search error type.

use thiserror::Error;

use mazepath_core::Point;

/// Why a search produced no path.
///
/// The messages are part of the external result format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Invalid start position")]
    InvalidStart(Point),

    #[error("Invalid end position")]
    InvalidEnd(Point),

    #[error("No path found")]
    NoPath { from: Point, to: Point },
}

/// An algorithm name that is not one of `bfs`, `dijkstra` or `astar`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?}")]
pub struct UnknownAlgorithm(pub String);

pub type SearchResult<T> = Result<T, SearchError>;
