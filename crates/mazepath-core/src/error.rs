//! Grid construction error type.

use thiserror::Error;

/// Errors produced while decoding an external maze layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("maze row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("maze of {rows}x{cols} cells exceeds the supported size")]
    TooLarge { rows: usize, cols: usize },
}
