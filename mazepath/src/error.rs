//! Boundary error type.

use thiserror::Error;

use mazepath_core::GridError;

/// Prefix for failures that are not part of the request contract.
pub const EXECUTION_ERROR: &str = "mazepath execution error";

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong before a search runs.
#[derive(Debug, Error)]
pub enum Error {
    /// Not exactly one command-line argument.
    #[error("Invalid arguments")]
    InvalidArguments,

    /// `maze`, `start` or `end` absent, null or empty.
    #[error("Missing required data")]
    MissingData,

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Grid(#[from] GridError),

    /// A position with fewer than two coordinates.
    #[error("{field} needs two coordinates, got {len}")]
    BadCoordinate { field: &'static str, len: usize },

    /// `worldSize` not a positive finite number, or `gridSize` not positive.
    #[error("invalid world frame: worldSize {world_size}, gridSize {grid_size}")]
    BadFrame { world_size: f64, grid_size: i32 },
}

impl Error {
    /// The text reported in the `error` field of the response.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidArguments | Self::MissingData => self.to_string(),
            _ => format!("{EXECUTION_ERROR}: {self}"),
        }
    }
}
