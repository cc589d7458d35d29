//! Decoding and validation of the JSON request object.

use serde::Deserialize;
use serde_json::{Map, Value};

use mazepath_core::{Grid, WorldFrame, WorldPos};
use mazepath_paths::Algorithm;

use crate::error::{Error, Result};

/// Keys that must be present and non-empty before anything else is read.
const REQUIRED: [&str; 3] = ["maze", "start", "end"];

/// The typed request, decoded once the required keys are known to be there.
#[derive(Debug, Deserialize)]
struct RawRequest {
    maze: Vec<Vec<i64>>,
    start: Vec<f64>,
    end: Vec<f64>,
    /// An explicit `null` is a type error, not a request for the default.
    #[serde(default = "default_algorithm")]
    algorithm: String,
    /// Optional `worldSize` / `gridSize` overrides.
    #[serde(flatten)]
    frame: WorldFrame,
}

fn default_algorithm() -> String {
    "astar".to_string()
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub grid: Grid,
    pub start: WorldPos,
    pub end: WorldPos,
    pub algorithm: Algorithm,
    pub frame: WorldFrame,
}

impl Request {
    /// Decode a request from its JSON text.
    ///
    /// `maze`, `start` and `end` are checked first: if any is absent, null or
    /// empty the request is `MissingData`, whatever else it holds. An absent
    /// `algorithm` means A*; an unrecognised name also falls back to A*.
    pub fn from_json(text: &str) -> Result<Self> {
        let object: Map<String, Value> = serde_json::from_str(text)?;
        if REQUIRED.iter().any(|k| object.get(*k).is_none_or(is_blank)) {
            return Err(Error::MissingData);
        }
        let raw: RawRequest = serde_json::from_value(Value::Object(object))?;

        let start = world_pos("start", &raw.start)?;
        let end = world_pos("end", &raw.end)?;
        let algorithm = raw.algorithm.parse::<Algorithm>().unwrap_or_else(|e| {
            log::warn!("{e}, falling back to {}", Algorithm::default());
            Algorithm::default()
        });
        if !raw.frame.is_valid() {
            return Err(Error::BadFrame {
                world_size: raw.frame.world_size,
                grid_size: raw.frame.grid_size,
            });
        }
        let grid = Grid::from_rows(&raw.maze)?;

        Ok(Self {
            grid,
            start,
            end,
            algorithm,
            frame: raw.frame,
        })
    }
}

/// Null, `false`, zero and empty values count as missing.
fn is_blank(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn world_pos(field: &'static str, coords: &[f64]) -> Result<WorldPos> {
    match coords {
        [x, z, ..] => Ok(WorldPos::new(*x, *z)),
        _ => Err(Error::BadCoordinate {
            field,
            len: coords.len(),
        }),
    }
}
