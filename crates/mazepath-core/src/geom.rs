//! Cell coordinates ([`Point`]) and rectangular cell sets ([`Range`]).
//!
//! `x` is the column and `y` the row, so the maze's `(row, col)` pairs map to
//! `Point { x: col, y: row }`. North is toward row 0.

use std::fmt;
use std::ops::{Add, Sub};

/// A grid cell. Ordered row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const EAST: Self = Self::new(1, 0);
    pub const SOUTH: Self = Self::new(0, 1);
    pub const WEST: Self = Self::new(-1, 0);
    pub const NORTH: Self = Self::new(0, -1);

    /// Cell at column `x`, row `y`.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn from_rc(row: i32, col: i32) -> Self {
        Self::new(col, row)
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.x
    }

    /// `[row, col]`, the external encoding.
    #[inline]
    pub const fn to_rc(self) -> [i32; 2] {
        [self.y, self.x]
    }

    /// The four cells sharing an edge with this one, in expansion order:
    /// east (right), south (down), west (left), north (up).
    ///
    /// All searches break ties through this order.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [Self::EAST, Self::SOUTH, Self::WEST, Self::NORTH].map(|d| self + d)
    }

    /// L1 distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self.manhattan(other) == 1
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

/// `(row, col)`
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The cells of a rectangle, `min` inclusive and `max` exclusive.
///
/// Cells are numbered row-major from `min`; [`Range::index`] and
/// [`Range::point`] convert between the two forms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Rectangle spanning corners `(x0, y0)` and `(x1, y1)`, in either order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// `width` columns by `height` rows starting at the origin. Negative
    /// sizes give an empty range.
    #[inline]
    pub fn with_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width.max(0), height.max(0))
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Row-major position of `p`, or `None` outside the range.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        self.contains(p).then(|| {
            let d = p - self.min;
            d.y as usize * self.width() as usize + d.x as usize
        })
    }

    /// Inverse of [`Range::index`]. `i` must be below [`Range::len`].
    #[inline]
    pub fn point(self, i: usize) -> Point {
        let w = self.width() as usize;
        self.min + Point::new((i % w) as i32, (i / w) as i32)
    }

    /// Every cell, row by row.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            len: self.len(),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major iterator over a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    len: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.len {
            return None;
        }
        let p = self.range.point(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}
