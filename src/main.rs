//! trivia - A trivia question bank served over a JSON HTTP API
//!
//! Command-line entry point: starts the server or inspects seed files.

mod cli;
mod commands;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
