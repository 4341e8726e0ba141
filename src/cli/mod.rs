//! Command Line Interface (CLI) layer for seq.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): config merging, logging setup,
//! writing to stdout and reporting failures with usage help.
//!
//! If you are embedding seq into another application, prefer the library
//! entrypoints in `seq::api` instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::{report_failure, run};
