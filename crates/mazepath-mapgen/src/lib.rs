//! Maze generation for mazepath: carves a room lattice and rasterises it
//! into an occupancy [`mazepath_core::Grid`] ready for searching.

pub mod maze;

pub use maze::{EXTRA_PASSAGE_RATIO, MazeGen, Room};
