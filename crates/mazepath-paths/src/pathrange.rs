use std::cmp::Ordering;

use mazepath_core::{Point, Range};

/// Search state of one cell. Stale unless `stamp` equals the search
/// counter of the owning [`PathRange`].
#[derive(Clone, Copy, Default)]
pub(crate) struct Node {
    /// Best known cost from the start.
    pub(crate) cost: i32,
    pub(crate) parent: Option<usize>,
    pub(crate) stamp: u32,
    /// Dequeued and finalised.
    pub(crate) done: bool,
}

/// Frontier entry. `BinaryHeap` is a max-heap, so the ordering is reversed:
/// the entry with the smallest `(priority, cost, cell)` pops first.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct Entry {
    pub(crate) priority: i32,
    pub(crate) cost: i32,
    pub(crate) cell: Point,
    pub(crate) idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.priority, other.cost, other.cell).cmp(&(self.priority, self.cost, self.cell))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reusable search workspace over one rectangle of cells.
///
/// Holds a node per cell plus a neighbor scratch buffer. Starting a search
/// bumps a counter instead of clearing the nodes, so back-to-back queries on
/// the same range only allocate their frontier and result. Paths are read
/// back from parent links once the goal is reached.
pub struct PathRange {
    pub(crate) bounds: Range,
    pub(crate) nodes: Vec<Node>,
    pub(crate) stamp: u32,
    pub(crate) expanded: usize,
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    pub fn new(bounds: Range) -> Self {
        Self {
            bounds,
            nodes: vec![Node::default(); bounds.len()],
            stamp: 0,
            expanded: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Move the workspace to `bounds`. The node arena only grows.
    pub fn set_range(&mut self, bounds: Range) {
        self.bounds = bounds;
        self.expanded = 0;
        if bounds.len() > self.nodes.len() {
            self.nodes = vec![Node::default(); bounds.len()];
            self.stamp = 0;
        }
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.bounds
    }

    /// Cells the last search dequeued and expanded.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Begin a search rooted at node `start`: invalidate every node and
    /// return the new stamp.
    pub(crate) fn begin(&mut self, start: usize) -> u32 {
        self.stamp = self.stamp.wrapping_add(1);
        if self.stamp == 0 {
            // Old stamps would alias the new ones after a wrap.
            self.nodes.fill(Node::default());
            self.stamp = 1;
        }
        self.expanded = 0;
        self.nodes[start] = Node {
            cost: 0,
            parent: None,
            stamp: self.stamp,
            done: false,
        };
        self.stamp
    }

    /// Cells from the search root to `goal`, following parent links.
    pub(crate) fn trace(&self, goal: usize) -> Vec<Point> {
        let mut path: Vec<Point> =
            std::iter::successors(Some(goal), |&i| self.nodes[i].parent)
                .map(|i| self.bounds.point(i))
                .collect();
        path.reverse();
        path
    }

    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }
}
