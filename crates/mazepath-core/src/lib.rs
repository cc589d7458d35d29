//! **mazepath-core** — core types for maze path finding.
//!
//! This crate provides the foundational types shared by the *mazepath*
//! crates: cell geometry, the immutable occupancy [`Grid`], and the
//! [`WorldFrame`] that maps continuous world positions onto grid cells.

pub mod error;
pub mod geom;
pub mod grid;
pub mod world;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Cell, Grid};
pub use world::{WorldFrame, WorldPos};
