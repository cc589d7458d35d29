//! mazepath: shortest paths through a maze, one JSON request at a time.
//!
//! The request names a maze, world-space start and end positions, and an
//! optional algorithm. [`run`] converts the positions to grid cells, runs the
//! search, and returns the [`Response`] to print. Every failure becomes a
//! response too, so callers always get exactly one JSON object.

pub mod error;
pub mod generate;
pub mod request;
pub mod response;

pub use error::{Error, Result};
pub use generate::{GeneratedRequest, generate_request};
pub use request::Request;
pub use response::{Found, PATH_ELEVATION, Response};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "MAZEPATH_LOG";

/// Install the stderr logger, filtered by [`LOG_ENV`] (default `warn`).
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn")).init();
}

/// Handle one invocation. `args` excludes the program name and must hold
/// exactly one JSON-encoded request.
pub fn run(args: &[String]) -> Response {
    let result = match args {
        [json] => handle(json),
        _ => Err(Error::InvalidArguments),
    };
    result.unwrap_or_else(|e| {
        log::error!("request rejected: {e}");
        Response::from_error(&e)
    })
}

/// Decode, search and assemble.
pub fn handle(json: &str) -> Result<Response> {
    let req = Request::from_json(json)?;
    let start = req.frame.to_grid(req.start);
    let end = req.frame.to_grid(req.end);
    log::info!(
        "{} on {}x{} maze: {start} -> {end}",
        req.algorithm,
        req.grid.height(),
        req.grid.width()
    );

    let outcome = mazepath_paths::search(&req.grid, req.algorithm, start, end);
    if let Err(e) = &outcome {
        log::info!("{}: {e}", req.algorithm);
    }
    Ok(Response::assemble(outcome, req.frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn run_json(request: Value) -> Value {
        let resp = run(&[request.to_string()]);
        serde_json::from_str(&resp.to_json()).unwrap()
    }

    /// World position of the lower corner of `(row, col)` in the default frame.
    fn world(row: i32, col: i32) -> [f64; 2] {
        [col as f64 * 2.0 - 30.0, row as f64 * 2.0 - 30.0]
    }

    #[test]
    fn wrong_argument_count() {
        assert_eq!(run(&[]).to_json(), r#"{"error":"Invalid arguments"}"#);
        let two = vec!["{}".to_string(), "{}".to_string()];
        assert_eq!(run(&two).to_json(), r#"{"error":"Invalid arguments"}"#);
    }

    #[test]
    fn missing_data() {
        let v = run_json(json!({"maze": [[0]], "start": [0, 0]}));
        assert_eq!(v, json!({"error": "Missing required data"}));
    }

    #[test]
    fn malformed_json_is_execution_error() {
        let resp = run(&["not json".to_string()]);
        let v: Value = serde_json::from_str(&resp.to_json()).unwrap();
        let msg = v["error"].as_str().unwrap();
        assert!(msg.starts_with("mazepath execution error: "), "{msg}");
        assert!(v.get("success").is_none());
    }

    #[test]
    fn open_three_by_three_bfs() {
        let v = run_json(json!({
            "maze": [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
            "start": world(0, 0),
            "end": world(2, 2),
            "algorithm": "bfs"
        }));
        assert_eq!(v["algorithm"], "BFS");
        assert_eq!(v["success"], true);
        assert_eq!(v["length"], 5);
        assert_eq!(v["cost"], 4);
        assert_eq!(v["path"], json!([[0, 0], [0, 1], [0, 2], [1, 2], [2, 2]]));
        assert_eq!(v["gridPath"], v["path"]);
        assert_eq!(v["worldPath"][4], json!([-26.0, 2, -26.0]));
    }

    #[test]
    fn forced_detour_any_algorithm() {
        for (name, label) in [("bfs", "BFS"), ("dijkstra", "Dijkstra"), ("astar", "A*")] {
            let v = run_json(json!({
                "maze": [[0, 0], [1, 0]],
                "start": world(0, 0),
                "end": world(1, 1),
                "algorithm": name
            }));
            assert_eq!(v["algorithm"], label);
            assert_eq!(v["path"], json!([[0, 0], [0, 1], [1, 1]]));
            assert_eq!(v["cost"], 2);
        }
    }

    #[test]
    fn default_algorithm_is_astar() {
        let v = run_json(json!({
            "maze": [[0, 0], [1, 0]],
            "start": world(0, 0),
            "end": world(1, 1)
        }));
        assert_eq!(v["algorithm"], "A*");
    }

    #[test]
    fn wall_start() {
        for name in ["bfs", "dijkstra", "astar"] {
            let v = run_json(json!({
                "maze": [[1]],
                "start": world(0, 0),
                "end": world(0, 0),
                "algorithm": name
            }));
            assert_eq!(v, json!({"error": "Invalid start position"}));
        }
    }

    #[test]
    fn end_outside_maze() {
        let v = run_json(json!({
            "maze": [[0, 0]],
            "start": world(0, 0),
            "end": [25.0, 25.0]
        }));
        assert_eq!(v, json!({"error": "Invalid end position"}));
    }

    #[test]
    fn disconnected() {
        let request = json!({
            "maze": [[0, 1], [1, 0]],
            "start": world(0, 0),
            "end": world(1, 1)
        });
        let text = run(&[request.to_string()]).to_json();
        assert_eq!(text, r#"{"error":"No path found","success":false}"#);
    }

    #[test]
    fn zero_grid_size_is_execution_error() {
        let v = run_json(json!({"maze": [[0]], "start": [0, 0], "end": [0, 0], "gridSize": 0}));
        let msg = v["error"].as_str().unwrap();
        assert!(msg.starts_with("mazepath execution error: "), "{msg}");
        assert!(v.get("worldPath").is_none());
    }

    #[test]
    fn missing_end_with_bad_algorithm() {
        let v = run_json(json!({"maze": [[0]], "start": [0, 0], "algorithm": 5}));
        assert_eq!(v, json!({"error": "Missing required data"}));
    }

    #[test]
    fn custom_frame() {
        // 4 world units per cell: (x=-1, z=1) lands in row 2, col 2.
        let v = run_json(json!({
            "maze": [[0, 0, 0], [0, 0, 0], [0, 0, 0]],
            "start": [-5.0, -5.0],
            "end": [-1.0, 1.0],
            "worldSize": 20,
            "gridSize": 5
        }));
        assert_eq!(v["success"], true);
        assert_eq!(v["path"][0], json!([1, 1]));
        assert_eq!(v["cost"], 2);
        assert_eq!(v["worldPath"][0], json!([-6.0, 2, -6.0]));
    }
}
