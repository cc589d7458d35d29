//! Perfect-maze generation with a few extra loops.
//!
//! The maze is carved on a lattice of `width` × `height` rooms by a
//! randomised depth-first backtracker. A number of extra passages are then
//! knocked through so the result has loops, and [`MazeGen::layout`]
//! rasterises it into a `2·width` × `2·height` occupancy [`Grid`].

use mazepath_core::{Cell, Grid, Point};
use rand::{Rng, RngExt};

/// Fraction of rooms that get an extra passage after carving.
pub const EXTRA_PASSAGE_RATIO: f64 = 0.1;

/// Open sides of one room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Room {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
    pub visited: bool,
}

impl Room {
    /// Open the side facing the unit step `d`.
    fn open_toward(&mut self, d: Point) {
        match d {
            Point::EAST => self.east = true,
            Point::WEST => self.west = true,
            Point::SOUTH => self.south = true,
            Point::NORTH => self.north = true,
            _ => {}
        }
    }
}

/// Maze generator over a room lattice.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    width: i32,
    height: i32,
    rooms: Vec<Room>,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator for a `width` × `height` room lattice. Nothing is
    /// carved until [`MazeGen::generate`] runs.
    pub fn new(width: i32, height: i32, rng: R) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            rng,
            width,
            height,
            rooms: vec![Room::default(); (width * height) as usize],
        }
    }

    /// Lattice size in rooms.
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// The room at lattice position `p` (x = column, y = row).
    pub fn room(&self, p: Point) -> Option<Room> {
        self.index(p).map(|i| self.rooms[i])
    }

    /// Carve the maze and add the extra passages. Returns the number of
    /// extra passages attempted.
    pub fn generate(&mut self) -> usize {
        self.rooms.fill(Room::default());
        self.backtrack();

        let extra = (self.width as f64 * self.height as f64 * EXTRA_PASSAGE_RATIO) as usize;
        for _ in 0..extra {
            let p = Point::new(
                self.rng.random_range(0..self.width),
                self.rng.random_range(0..self.height),
            );
            let q = if self.rng.random_range(0..2) == 0 {
                p + Point::EAST
            } else {
                p + Point::SOUTH
            };
            self.open_between(p, q);
        }
        log::debug!(
            "maze {}x{} carved with {extra} extra passages",
            self.width,
            self.height
        );
        extra
    }

    fn backtrack(&mut self) {
        let start = Point::new(
            self.rng.random_range(0..self.width),
            self.rng.random_range(0..self.height),
        );
        let mut stack = vec![start];
        self.mark_visited(start);

        let mut candidates: Vec<Point> = Vec::with_capacity(4);
        while let Some(&current) = stack.last() {
            candidates.clear();
            for d in [Point::NORTH, Point::SOUTH, Point::EAST, Point::WEST] {
                let n = current + d;
                if self.room(n).is_some_and(|r| !r.visited) {
                    candidates.push(n);
                }
            }

            if candidates.is_empty() {
                stack.pop();
                continue;
            }
            let next = candidates[self.rng.random_range(0..candidates.len())];
            self.mark_visited(next);
            self.open_between(current, next);
            stack.push(next);
        }
    }

    fn mark_visited(&mut self, p: Point) {
        if let Some(i) = self.index(p) {
            self.rooms[i].visited = true;
        }
    }

    /// Remove the wall between adjacent rooms `a` and `b`. The side of `a`
    /// is opened even when `b` lies outside the lattice.
    fn open_between(&mut self, a: Point, b: Point) {
        if let Some(i) = self.index(a) {
            self.rooms[i].open_toward(b - a);
        }
        if let Some(i) = self.index(b) {
            self.rooms[i].open_toward(a - b);
        }
    }

    /// Rasterise into an occupancy grid of `2·width` × `2·height` cells.
    ///
    /// Room `(x, y)` occupies layout cell `(row 2y+1, col 2x+1)`; an open
    /// side also opens the neighbouring layout cell toward the adjacent
    /// room. Sides on the lattice border never open.
    pub fn layout(&self) -> Grid {
        let mut grid = Grid::new(self.width * 2, self.height * 2, Cell::Wall);
        for y in 0..self.height {
            for x in 0..self.width {
                let Some(room) = self.room(Point::new(x, y)) else {
                    continue;
                };
                if !room.visited {
                    continue;
                }
                let c = Point::new(2 * x + 1, 2 * y + 1);
                grid.set(c, Cell::Open);
                if room.north && y > 0 {
                    grid.set(c + Point::NORTH, Cell::Open);
                }
                if room.south && y < self.height - 1 {
                    grid.set(c + Point::SOUTH, Cell::Open);
                }
                if room.east && x < self.width - 1 {
                    grid.set(c + Point::EAST, Cell::Open);
                }
                if room.west && x > 0 {
                    grid.set(c + Point::WEST, Cell::Open);
                }
            }
        }
        grid
    }

    /// Layout cell of the bottom-middle room, where a run starts.
    pub fn start_cell(&self) -> Point {
        Self::layout_cell(Point::new(self.width / 2, self.height - 1))
    }

    /// Layout cell of the top-middle room, the goal.
    pub fn end_cell(&self) -> Point {
        Self::layout_cell(Point::new(self.width / 2, 0))
    }

    fn layout_cell(room: Point) -> Point {
        Point::new(2 * room.x + 1, 2 * room.y + 1)
    }
}
