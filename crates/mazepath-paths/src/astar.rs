use mazepath_core::Point;

use crate::PathRange;
use crate::traits::AstarPather;

impl PathRange {
    /// Shortest path from `from` to `to` by A*, guided by the pather's
    /// estimate.
    ///
    /// Entries are ordered by `(cost + estimate, cost, cell)`; otherwise the
    /// rules match [`PathRange::dijkstra_path`]. With an admissible estimate
    /// the result is as cheap as Dijkstra's, though ties may resolve to a
    /// different path.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let path = self.best_first(pather, from, to, |p| pather.estimate(p, to));
        log::trace!("astar: {} cells expanded", self.expanded);
        path
    }
}
