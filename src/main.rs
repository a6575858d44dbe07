//! xbrup - Command-line tool for edge-directed pixel art upscaling

use std::process::ExitCode;

use xbrup::cli;

fn main() -> ExitCode {
    cli::run()
}
