//! # Stockroom CLI
//!
//! The binary is intentionally thin: argument parsing, logging setup, dispatch
//! and rendering live in `cli/`. This file only invokes `cli::run()` and turns
//! errors into `Error: <message>` on stderr with exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
