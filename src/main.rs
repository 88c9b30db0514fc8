//! Binary entrypoint for the gist CLI.

use std::process::ExitCode;

use gist_engine::cli;

/// Summarize a file, stdin, or a web page from the command line.
fn main() -> ExitCode {
    cli::run()
}
