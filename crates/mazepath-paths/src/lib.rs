//! Shortest-path search on maze occupancy grids.
//!
//! Three interchangeable strategies share one neighbor-expansion contract:
//!
//! - **BFS** ([`PathRange::bfs_path`]), optimal in steps
//! - **Dijkstra** ([`PathRange::dijkstra_path`]), optimal for positive weights
//! - **A\*** with the Manhattan heuristic ([`PathRange::astar_path`])
//!
//! [`search`] validates the endpoints and dispatches on an [`Algorithm`]
//! tag. [`PathRange`] owns the node arena, so callers that run many
//! queries over the same grid can reuse one instead.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A*, [`PathRange::search`] |
//!
//! [`mazepath_core::Grid`] implements all three with unit costs.

mod astar;
mod bfs;
mod dijkstra;
mod error;
mod grid;
mod pathrange;
mod search;
mod traits;

pub use error::{SearchError, SearchResult, UnknownAlgorithm};
pub use pathrange::PathRange;
pub use search::{Algorithm, PathFound, search};
pub use traits::{AstarPather, Pather, WeightedPather};
