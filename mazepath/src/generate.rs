//! Ready-made requests over a freshly generated maze.

use rand::Rng;
use serde::Serialize;

use mazepath_core::WorldFrame;
use mazepath_mapgen::MazeGen;

/// Rooms per side of a generated maze. The layout is twice as wide, which
/// matches the default frame's 30 cells.
pub const MAZE_ROOMS: i32 = 15;

/// A request object as `mazepath` expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedRequest {
    pub maze: Vec<Vec<u8>>,
    /// `[x, z]` of the start cell's lower corner.
    pub start: [f64; 2],
    pub end: [f64; 2],
    pub algorithm: &'static str,
}

impl GeneratedRequest {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Carve a new maze and place start and end in its bottom-middle and
/// top-middle rooms.
pub fn generate_request<R: Rng>(rng: R) -> GeneratedRequest {
    let frame = WorldFrame::default();
    let mut mg = MazeGen::new(MAZE_ROOMS, MAZE_ROOMS, rng);
    mg.generate();
    let start = frame.to_world(mg.start_cell());
    let end = frame.to_world(mg.end_cell());
    log::debug!("generated maze: start {} end {}", mg.start_cell(), mg.end_cell());
    GeneratedRequest {
        maze: mg.layout().rows(),
        start: [start.x, start.z],
        end: [end.x, end.z],
        algorithm: "astar",
    }
}
