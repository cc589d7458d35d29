//! mazepath-gen: prints a request over a freshly generated maze.
//!
//! Usage: `mazepath-gen [seed]`. The output can be passed straight to
//! `mazepath`.

use rand::SeedableRng;
use rand::rngs::StdRng;

use mazepath_lib::{generate_request, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let req = match std::env::args().nth(1) {
        Some(seed) => generate_request(StdRng::seed_from_u64(seed.parse()?)),
        None => generate_request(rand::rng()),
    };
    println!("{}", req.to_json()?);
    Ok(())
}
