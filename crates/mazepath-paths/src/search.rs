//! Algorithm selection and the single-query search entry point.

use std::fmt;
use std::str::FromStr;

use mazepath_core::{Grid, Point};

use crate::PathRange;
use crate::error::{SearchError, SearchResult, UnknownAlgorithm};
use crate::traits::{AstarPather, WeightedPather};

/// The search strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    Bfs,
    Dijkstra,
    #[default]
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Self::Bfs, Self::Dijkstra, Self::Astar];

    /// Display name reported in results.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dijkstra => "Dijkstra",
            Self::Astar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-insensitive: `bfs`, `dijkstra` or `astar`.
impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" => Ok(Self::Astar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFound {
    pub algorithm: Algorithm,
    /// Cells from start to end, inclusive.
    pub path: Vec<Point>,
    /// Sum of edge costs along `path`; the step count on a unit-cost grid.
    pub cost: i32,
}

impl PathFound {
    /// Number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

impl PathRange {
    /// Run `algorithm` from `from` to `to`.
    ///
    /// Both endpoints must be passable and inside the range; the start is
    /// checked first.
    pub fn search<P: AstarPather>(
        &mut self,
        pather: &P,
        algorithm: Algorithm,
        from: Point,
        to: Point,
    ) -> SearchResult<PathFound> {
        if !self.bounds.contains(from) || !pather.passable(from) {
            return Err(SearchError::InvalidStart(from));
        }
        if !self.bounds.contains(to) || !pather.passable(to) {
            return Err(SearchError::InvalidEnd(to));
        }

        let path = match algorithm {
            Algorithm::Bfs => self.bfs_path(pather, from, to),
            Algorithm::Dijkstra => self.dijkstra_path(pather, from, to),
            Algorithm::Astar => self.astar_path(pather, from, to),
        };
        let Some(path) = path else {
            log::debug!(
                "{algorithm}: no path {from} -> {to} after {} cells",
                self.expanded
            );
            return Err(SearchError::NoPath { from, to });
        };

        let cost = path_cost(pather, &path);
        log::debug!(
            "{algorithm}: {from} -> {to}, {} cells expanded, cost {cost}",
            self.expanded
        );
        Ok(PathFound {
            algorithm,
            path,
            cost,
        })
    }
}

/// Search `grid` with a fresh [`PathRange`] covering it.
pub fn search(
    grid: &Grid,
    algorithm: Algorithm,
    from: Point,
    to: Point,
) -> SearchResult<PathFound> {
    PathRange::new(grid.bounds()).search(grid, algorithm, from, to)
}

fn path_cost<P: WeightedPather>(pather: &P, path: &[Point]) -> i32 {
    path.windows(2).map(|w| pather.cost(w[0], w[1])).sum()
}
