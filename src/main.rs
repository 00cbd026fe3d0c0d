//! atlasnote - Command-line tool for annotating sprite atlas metadata

use std::process::ExitCode;

use atlasnote::cli;

fn main() -> ExitCode {
    cli::run()
}
