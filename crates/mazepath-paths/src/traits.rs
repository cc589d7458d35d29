use mazepath_core::Point;

/// What BFS needs from a map: which cells can be stood on and which cells
/// are one move away.
pub trait Pather {
    /// Whether `p` may appear on a path.
    fn passable(&self, p: Point) -> bool;

    /// Push the passable cells one move from `p` onto `buf`, always in the
    /// same order. `buf` arrives empty.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A map whose moves carry a price.
pub trait WeightedPather: Pather {
    /// Price of the move `from` → `to`; strictly positive.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// A map that can guess the remaining price to a target.
pub trait AstarPather: WeightedPather {
    /// Lower bound on the price from `from` to `to`. Overestimating breaks
    /// optimality.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
