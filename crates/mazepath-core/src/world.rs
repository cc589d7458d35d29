//! Mapping between continuous world positions and grid cells.
//!
//! The world is a square of side `world_size` centred on the origin and is
//! divided into `grid_size` × `grid_size` cells. World `x` runs along grid
//! columns and world `z` along grid rows.

use crate::geom::Point;

/// A position on the world ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPos {
    pub x: f64,
    pub z: f64,
}

impl WorldPos {
    #[inline]
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// `(x, elevation, z)`, the 3D form handed to renderers.
    #[inline]
    pub fn with_elevation<Y>(self, y: Y) -> (f64, Y, f64) {
        (self.x, y, self.z)
    }
}

/// Scale and offset between world space and grid indices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct WorldFrame {
    /// Side length of the world square, in world units.
    pub world_size: f64,
    /// Cells per side of the (square) grid.
    pub grid_size: i32,
}

impl Default for WorldFrame {
    fn default() -> Self {
        Self {
            world_size: 60.0,
            grid_size: 30,
        }
    }
}

impl WorldFrame {
    pub const fn new(world_size: f64, grid_size: i32) -> Self {
        Self {
            world_size,
            grid_size,
        }
    }

    /// Whether the frame can map positions at all: a positive finite world
    /// size and at least one cell per side.
    pub fn is_valid(self) -> bool {
        self.world_size.is_finite() && self.world_size > 0.0 && self.grid_size > 0
    }

    /// World units covered by one cell.
    #[inline]
    pub fn cell_size(self) -> f64 {
        self.world_size / self.grid_size as f64
    }

    /// The cell containing `pos`.
    ///
    /// The scaled coordinate is truncated toward zero and never clamped, so
    /// positions outside the world may land on out-of-range cells, which the
    /// grid then reports as not open.
    pub fn to_grid(self, pos: WorldPos) -> Point {
        let half = self.world_size / 2.0;
        let n = self.grid_size as f64;
        let col = ((pos.x + half) / self.world_size * n) as i32;
        let row = ((pos.z + half) / self.world_size * n) as i32;
        Point::from_rc(row, col)
    }

    /// World position of the lower corner of cell `p`.
    ///
    /// This is not an exact inverse of [`WorldFrame::to_grid`]: any offset
    /// inside the cell is lost.
    pub fn to_world(self, p: Point) -> WorldPos {
        let half = self.world_size / 2.0;
        let n = self.grid_size as f64;
        WorldPos {
            x: p.col() as f64 / n * self.world_size - half,
            z: p.row() as f64 / n * self.world_size - half,
        }
    }
}
