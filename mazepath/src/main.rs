//! mazepath: reads one JSON request from the command line and prints one
//! JSON response on stdout.

use mazepath_lib::{init_logging, run};

fn main() {
    init_logging();
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let response = run(&args);
    println!("{}", response.to_json());
}
