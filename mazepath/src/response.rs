//! Result assembly: turns a search outcome into the JSON response object.

use serde::Serialize;

use mazepath_core::WorldFrame;
use mazepath_paths::{PathFound, SearchError, SearchResult};

use crate::error::{EXECUTION_ERROR, Error};

/// Height at which path points float above the ground plane. Written as an
/// integer, so `worldPath` triples read `[x, 2, z]`.
pub const PATH_ELEVATION: i32 = 2;

/// Body of a successful response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Found {
    pub algorithm: &'static str,
    /// `[row, col]` pairs from start to end.
    pub path: Vec<[i32; 2]>,
    pub length: usize,
    pub success: bool,
    pub cost: i32,
    /// `[x, elevation, z]` for each cell's lower corner.
    pub world_path: Vec<(f64, i32, f64)>,
    pub grid_path: Vec<[i32; 2]>,
}

/// The single JSON object written for every invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Found(Found),
    /// The search ran and exhausted the frontier.
    NotFound { error: String, success: bool },
    /// The request could not be searched at all.
    Error { error: String },
}

impl Response {
    /// Package a search outcome, mapping the path into world space.
    pub fn assemble(outcome: SearchResult<PathFound>, frame: WorldFrame) -> Self {
        match outcome {
            Ok(found) => Self::Found(assemble_found(&found, frame)),
            Err(e @ SearchError::NoPath { .. }) => Self::NotFound {
                error: e.to_string(),
                success: false,
            },
            Err(e @ (SearchError::InvalidStart(_) | SearchError::InvalidEnd(_))) => Self::Error {
                error: e.to_string(),
            },
        }
    }

    pub fn from_error(e: &Error) -> Self {
        Self::Error { error: e.message() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Encode as one line of JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("{EXECUTION_ERROR}: {e}") }).to_string()
        })
    }
}

fn assemble_found(found: &PathFound, frame: WorldFrame) -> Found {
    let grid_path: Vec<[i32; 2]> = found.path.iter().map(|p| p.to_rc()).collect();
    let world_path = found
        .path
        .iter()
        .map(|&p| frame.to_world(p).with_elevation(PATH_ELEVATION))
        .collect();
    Found {
        algorithm: found.algorithm.label(),
        path: grid_path.clone(),
        length: found.len(),
        success: true,
        cost: found.cost,
        world_path,
        grid_path,
    }
}
