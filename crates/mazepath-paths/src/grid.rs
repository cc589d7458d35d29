//! [`Pather`] implementations for the occupancy [`Grid`].
//!
//! Moves are 4-connected with unit cost, and the A* estimate is the
//! Manhattan distance, which is consistent on such a grid.

use mazepath_core::{Grid, Point};

use crate::traits::{AstarPather, Pather, WeightedPather};

impl Pather for Grid {
    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.is_open(p)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(Grid::neighbors(self, p));
    }
}

impl WeightedPather for Grid {
    #[inline]
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl AstarPather for Grid {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        from.manhattan(to)
    }
}
