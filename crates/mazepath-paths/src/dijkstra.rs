use std::collections::BinaryHeap;

use mazepath_core::Point;

use crate::PathRange;
use crate::pathrange::{Entry, Node};
use crate::traits::WeightedPather;

impl PathRange {
    /// Cheapest path from `from` to `to` by Dijkstra's algorithm.
    ///
    /// The frontier pops the lowest cost first, ties going to the smaller
    /// cell in row-major order. Returns both endpoints inclusive, or `None`
    /// when the goal is unreachable or either endpoint lies outside the
    /// range.
    pub fn dijkstra_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let path = self.best_first(pather, from, to, |_| 0);
        log::trace!("dijkstra: {} cells expanded", self.expanded);
        path
    }

    /// Best-first search shared by Dijkstra and A*, ordered by
    /// `(cost + estimate, cost, cell)`.
    ///
    /// A neighbor is pushed only when it strictly improves the best known
    /// cost of a cell that is not yet finalised; leftover entries for
    /// finalised cells are dropped when popped. The goal is finalised before
    /// the search stops.
    pub(crate) fn best_first<P, H>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        estimate: H,
    ) -> Option<Vec<Point>>
    where
        P: WeightedPather,
        H: Fn(Point) -> i32,
    {
        let start = self.idx(from)?;
        let goal = self.idx(to)?;
        let stamp = self.begin(start);

        let mut open = BinaryHeap::from([Entry {
            priority: estimate(from),
            cost: 0,
            cell: from,
            idx: start,
        }]);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(cur) = open.pop() else {
                break 'search false;
            };
            if self.nodes[cur.idx].done {
                continue;
            }
            self.nodes[cur.idx].done = true;
            if cur.idx == goal {
                break 'search true;
            }
            self.expanded += 1;

            nbuf.clear();
            pather.neighbors(cur.cell, &mut nbuf);
            for &np in &nbuf {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let cost = cur.cost + pather.cost(cur.cell, np);
                let n = self.nodes[ni];
                if n.stamp == stamp && (n.done || cost >= n.cost) {
                    continue;
                }
                self.nodes[ni] = Node {
                    cost,
                    parent: Some(cur.idx),
                    stamp,
                    done: false,
                };
                open.push(Entry {
                    priority: cost + estimate(np),
                    cost,
                    cell: np,
                    idx: ni,
                });
            }
        };

        self.nbuf = nbuf;
        found.then(|| self.trace(goal))
    }
}

#[cfg(test)]
mod tests {
    use mazepath_core::{Cell, Grid, Point};

    use crate::PathRange;
    use crate::traits::{Pather, WeightedPather};

    fn rc(row: i32, col: i32) -> Point {
        Point::from_rc(row, col)
    }

    #[test]
    fn open_grid_ties_go_to_smaller_cell() {
        let g = Grid::new(3, 3, Cell::Open);
        let mut pr = PathRange::new(g.bounds());
        let path = pr.dijkstra_path(&g, rc(0, 0), rc(2, 2)).unwrap();
        assert_eq!(path, vec![rc(0, 0), rc(0, 1), rc(0, 2), rc(1, 2), rc(2, 2)]);
    }

    #[test]
    fn detours_around_wall() {
        let g = Grid::from_rows(&[vec![0, 0], vec![1, 0]]).unwrap();
        let mut pr = PathRange::new(g.bounds());
        let path = pr.dijkstra_path(&g, rc(0, 0), rc(1, 1)).unwrap();
        assert_eq!(path, vec![rc(0, 0), rc(0, 1), rc(1, 1)]);
    }

    #[test]
    fn walled_off_goal() {
        let g = Grid::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        let mut pr = PathRange::new(g.bounds());
        assert_eq!(pr.dijkstra_path(&g, rc(0, 0), rc(1, 1)), None);
    }

    /// Stepping onto `(0, 1)` costs 10.
    struct Toll<'a>(&'a Grid);

    impl Pather for Toll<'_> {
        fn passable(&self, p: Point) -> bool {
            self.0.is_open(p)
        }
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            buf.extend(self.0.neighbors(p));
        }
    }

    impl WeightedPather for Toll<'_> {
        fn cost(&self, _from: Point, to: Point) -> i32 {
            if to == rc(0, 1) { 10 } else { 1 }
        }
    }

    #[test]
    fn weighted_edges_avoid_expensive_cell() {
        let g = Grid::new(3, 2, Cell::Open);
        let mut pr = PathRange::new(g.bounds());
        let path = pr.dijkstra_path(&Toll(&g), rc(0, 0), rc(0, 2)).unwrap();
        assert_eq!(path, vec![rc(0, 0), rc(1, 0), rc(1, 1), rc(1, 2), rc(0, 2)]);
    }
}
