//! The occupancy grid searched by the path finders.
//!
//! A [`Grid`] is a dense row-major array of [`Cell`] values. Externally a maze
//! is an array of rows of integers: `0` is open floor and anything else is a
//! wall.

use crate::error::GridError;
use crate::geom::{Point, Range};

/// State of one maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Open,
    Wall,
}

impl Cell {
    /// Decode the external encoding (`0` = open, anything else = wall).
    #[inline]
    pub const fn from_code(code: i64) -> Self {
        if code == 0 { Self::Open } else { Self::Wall }
    }

    /// The external encoding of this cell.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Wall => 1,
        }
    }
}

/// A rectangular occupancy grid anchored at the origin.
///
/// Searches only ever borrow a grid immutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a `width` × `height` grid filled with `fill`.
    pub fn new(width: i32, height: i32, fill: Cell) -> Self {
        let bounds = Range::with_size(width, height);
        Self {
            cells: vec![fill; bounds.len()],
            bounds,
        }
    }

    /// Build a grid from rows of external cell codes.
    ///
    /// The column count is the width of the first row; every other row must
    /// match it. An empty slice yields an empty grid.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().map(|&c| Cell::from_code(c)));
        }
        let (w, h) = match (i32::try_from(width), i32::try_from(rows.len())) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(GridError::TooLarge {
                    rows: rows.len(),
                    cols: width,
                });
            }
        };
        Ok(Self {
            cells,
            bounds: Range::with_size(w, h),
        })
    }

    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The cell at `p`, or `None` outside the grid.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `p`. Points outside the grid are ignored.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Whether `p` lies inside the grid and is open floor.
    ///
    /// Out-of-bounds points are simply not open; this never fails.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p) == Some(Cell::Open)
    }

    /// Open neighbours of `p`, in the order right, down, left, up.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter(move |&n| self.is_open(n))
    }

    /// Number of cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Rows of external cell codes, the inverse of [`Grid::from_rows`].
    pub fn rows(&self) -> Vec<Vec<u8>> {
        let w = self.bounds.width() as usize;
        if w == 0 {
            return vec![Vec::new(); self.bounds.height().max(0) as usize];
        }
        self.cells
            .chunks(w)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_and_size() {
        let g = Grid::from_rows(&[vec![0, 1, 0], vec![0, 0, 0]]).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.at(Point::from_rc(0, 1)), Some(Cell::Wall));
        assert_eq!(g.at(Point::from_rc(1, 1)), Some(Cell::Open));
        assert_eq!(g.count(Cell::Wall), 1);
    }

    #[test]
    fn nonzero_codes_are_walls() {
        let g = Grid::from_rows(&[vec![0, 2, -1]]).unwrap();
        assert!(g.is_open(Point::from_rc(0, 0)));
        assert!(!g.is_open(Point::from_rc(0, 1)));
        assert!(!g.is_open(Point::from_rc(0, 2)));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Grid::from_rows(&[vec![0, 0], vec![0]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_grid_has_nothing_open() {
        let rows: Vec<Vec<i64>> = Vec::new();
        let g = Grid::from_rows(&rows).unwrap();
        assert!(g.bounds().is_empty());
        assert!(!g.is_open(Point::new(0, 0)));
    }

    #[test]
    fn out_of_bounds_is_not_open() {
        let g = Grid::new(2, 2, Cell::Open);
        assert!(g.is_open(Point::new(1, 1)));
        assert!(!g.is_open(Point::new(-1, 0)));
        assert!(!g.is_open(Point::new(0, 2)));
        assert!(!g.is_open(Point::new(2, 0)));
    }

    #[test]
    fn neighbors_follow_fixed_order() {
        let g = Grid::new(3, 3, Cell::Open);
        let n: Vec<_> = g.neighbors(Point::from_rc(1, 1)).collect();
        assert_eq!(
            n,
            vec![
                Point::from_rc(1, 2),
                Point::from_rc(2, 1),
                Point::from_rc(1, 0),
                Point::from_rc(0, 1),
            ]
        );
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let g = Grid::from_rows(&[vec![0, 0], vec![1, 0]]).unwrap();
        let n: Vec<_> = g.neighbors(Point::from_rc(0, 0)).collect();
        assert_eq!(n, vec![Point::from_rc(0, 1)]);
    }

    #[test]
    fn set_and_rows_round_trip() {
        let mut g = Grid::new(3, 2, Cell::Wall);
        g.set(Point::from_rc(1, 2), Cell::Open);
        g.set(Point::from_rc(5, 5), Cell::Open);
        assert_eq!(g.rows(), vec![vec![1, 1, 1], vec![1, 1, 0]]);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[5], (Point::new(2, 1), Cell::Open));
    }
}
