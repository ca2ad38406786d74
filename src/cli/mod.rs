//! Command-line interface for prompt-forge.
//!
//! Provides the `convert` command that drives the CSV-to-catalog batch job.

mod commands;

pub use commands::{parse_cli, run_with_cli, Cli};
