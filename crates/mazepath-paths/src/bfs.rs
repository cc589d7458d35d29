use std::collections::VecDeque;

use mazepath_core::Point;

use crate::PathRange;
use crate::pathrange::Node;
use crate::traits::Pather;

impl PathRange {
    /// Fewest-steps path from `from` to `to` by breadth-first search.
    ///
    /// Cells are marked seen when enqueued, so each keeps the parent that
    /// discovered it first in the pather's neighbor order. The search ends
    /// when the goal is dequeued. Returns both endpoints inclusive, or `None`
    /// when the goal is unreachable or either endpoint lies outside the
    /// range.
    pub fn bfs_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start = self.idx(from)?;
        let goal = self.idx(to)?;
        let stamp = self.begin(start);

        let mut queue = VecDeque::from([start]);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = queue.pop_front() {
            if ci == goal {
                found = true;
                break;
            }
            self.expanded += 1;
            let steps = self.nodes[ci].cost + 1;

            nbuf.clear();
            pather.neighbors(self.bounds.point(ci), &mut nbuf);
            for &np in &nbuf {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.nodes[ni].stamp == stamp {
                    continue;
                }
                self.nodes[ni] = Node {
                    cost: steps,
                    parent: Some(ci),
                    stamp,
                    done: false,
                };
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        log::trace!("bfs: {} cells expanded, found={found}", self.expanded);
        found.then(|| self.trace(goal))
    }
}

#[cfg(test)]
mod tests {
    use mazepath_core::{Cell, Grid, Point};

    use crate::PathRange;

    fn rc(row: i32, col: i32) -> Point {
        Point::from_rc(row, col)
    }

    #[test]
    fn open_grid_prefers_right_then_down() {
        let g = Grid::new(3, 3, Cell::Open);
        let mut pr = PathRange::new(g.bounds());
        let path = pr.bfs_path(&g, rc(0, 0), rc(2, 2)).unwrap();
        assert_eq!(path, vec![rc(0, 0), rc(0, 1), rc(0, 2), rc(1, 2), rc(2, 2)]);
    }

    #[test]
    fn detours_around_wall() {
        let g = Grid::from_rows(&[vec![0, 0], vec![1, 0]]).unwrap();
        let mut pr = PathRange::new(g.bounds());
        let path = pr.bfs_path(&g, rc(0, 0), rc(1, 1)).unwrap();
        assert_eq!(path, vec![rc(0, 0), rc(0, 1), rc(1, 1)]);
    }

    #[test]
    fn walled_off_goal() {
        let g = Grid::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        let mut pr = PathRange::new(g.bounds());
        assert_eq!(pr.bfs_path(&g, rc(0, 0), rc(1, 1)), None);
    }

    #[test]
    fn start_is_goal() {
        let g = Grid::new(2, 2, Cell::Open);
        let mut pr = PathRange::new(g.bounds());
        assert_eq!(pr.bfs_path(&g, rc(1, 1), rc(1, 1)), Some(vec![rc(1, 1)]));
        assert_eq!(pr.expanded(), 0);
    }

    #[test]
    fn workspace_is_reusable() {
        let g = Grid::from_rows(&[vec![0, 0, 0], vec![1, 1, 0], vec![0, 0, 0]]).unwrap();
        let mut pr = PathRange::new(g.bounds());
        let there = pr.bfs_path(&g, rc(0, 0), rc(2, 0)).unwrap();
        let back = pr.bfs_path(&g, rc(2, 0), rc(0, 0)).unwrap();
        assert_eq!(there.len(), 7);
        assert_eq!(back.len(), 7);
        assert_eq!(back.first(), Some(&rc(2, 0)));
    }
}
