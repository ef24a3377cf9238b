//! Command-line interface orchestration for the grist fixture generator.
//!
//! Offers a single `generate` command that samples the initial graph and
//! the batched workload, then writes both fixture files for the replay
//! harness.

mod commands;

pub use commands::{
    Cli, CliError, Command, GenerateCommand, GenerationSummary, render_summary, run_cli,
};

#[cfg(test)]
mod tests;
