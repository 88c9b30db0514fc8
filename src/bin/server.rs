//! Summarization API server binary.
//! Run with: cargo run --bin gist-server

use std::process::ExitCode;

use gist_engine::server;

fn main() -> ExitCode {
    server::run()
}
