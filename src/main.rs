//! seq CLI entrypoint.
//!
//! A thin wrapper over the `cli` module: parse args, run, and exit with an
//! appropriate status. For programmatic use, prefer the library API
//! (`seq::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            cli::report_failure(&e);
            ExitCode::FAILURE
        }
    }
}
