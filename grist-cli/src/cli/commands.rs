//! Command implementations and argument parsing for the grist CLI.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use grist_core::{
    DEFAULT_GRAPH_FILENAME, DEFAULT_NUM_BATCHES, DEFAULT_NUM_EDGES, DEFAULT_NUM_NODES,
    DEFAULT_OPS_PER_BATCH, DEFAULT_WORKLOAD_FILENAME, DEFAULT_WRITE_PERCENTAGE, GraphSpec,
    SampleError, WorkloadSpec, WriteError, sample_graph, sample_workload, write_graph_file,
    write_workload_file,
};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "grist", about = "Generate synthetic graph workload fixtures.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Sample an initial graph and a batched workload, then write both
    /// fixture files.
    Generate(GenerateCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Upper bound of the node id range for the initial graph.
    #[arg(long, default_value_t = DEFAULT_NUM_NODES)]
    pub num_nodes: u64,

    /// Exact number of distinct edges in the initial graph.
    #[arg(long, default_value_t = DEFAULT_NUM_EDGES)]
    pub num_edges: usize,

    /// Number of batches in the workload.
    #[arg(long, default_value_t = DEFAULT_NUM_BATCHES)]
    pub num_batches: usize,

    /// Number of operations per batch.
    #[arg(long, default_value_t = DEFAULT_OPS_PER_BATCH)]
    pub ops_per_batch: usize,

    /// Percentage of operations that are writes, split evenly between adds
    /// and deletes.
    #[arg(
        long,
        default_value_t = DEFAULT_WRITE_PERCENTAGE,
        value_parser = clap::value_parser!(u8).range(0..=100),
    )]
    pub write_percentage: u8,

    /// Node id upper bound for operation endpoints (defaults to
    /// `--num-nodes`).
    #[arg(long)]
    pub node_id_range: Option<u64>,

    /// Output path for the initial-graph file.
    #[arg(long, default_value = DEFAULT_GRAPH_FILENAME)]
    pub graph_file: PathBuf,

    /// Output path for the workload file.
    #[arg(long, default_value = DEFAULT_WORKLOAD_FILENAME)]
    pub workload_file: PathBuf,

    /// Seed for the samplers; when omitted a fresh seed is drawn from OS
    /// entropy and reported in the summary.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Creating a parent directory for an output file failed.
    #[error("failed to create directory `{path}`: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Sampling rejected the supplied parameters.
    #[error(transparent)]
    Sample(#[from] SampleError),
    /// Writing a fixture file failed.
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Summarises the outcome of one `generate` run.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Seed the samplers were driven with.
    pub seed: u64,
    /// Number of distinct edges written to the graph file.
    pub edges: usize,
    /// Number of batches written to the workload file.
    pub batches: usize,
    /// Operations per batch.
    pub ops_per_batch: usize,
    /// Path of the initial-graph file.
    pub graph_file: PathBuf,
    /// Path of the workload file.
    pub workload_file: PathBuf,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when sampling or serialization fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use grist_cli::cli::{Cli, Command, GenerateCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = tempfile::tempdir()?;
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         num_nodes: 10,
///         num_edges: 5,
///         num_batches: 2,
///         ops_per_batch: 3,
///         write_percentage: 50,
///         node_id_range: None,
///         graph_file: dir.path().join("initial_graph.txt"),
///         workload_file: dir.path().join("input"),
///         seed: Some(7),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.edges, 5);
/// assert_eq!(summary.batches, 2);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    match cli.command {
        Command::Generate(generate) => {
            Span::current().record("command", field::display("generate"));
            run_generate(generate)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(
        seed = field::Empty,
        num_nodes = field::Empty,
        num_edges = field::Empty,
        num_batches = field::Empty,
    ),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GenerationSummary, CliError> {
    let seed = command.seed.unwrap_or_else(rand::random);
    let mut rng = SmallRng::seed_from_u64(seed);

    let span = Span::current();
    span.record("seed", field::display(seed));
    span.record("num_nodes", field::display(command.num_nodes));
    span.record("num_edges", field::display(command.num_edges));
    span.record("num_batches", field::display(command.num_batches));

    let graph_spec = GraphSpec {
        num_nodes: command.num_nodes,
        num_edges: command.num_edges,
    };
    let workload_spec = WorkloadSpec {
        num_batches: command.num_batches,
        ops_per_batch: command.ops_per_batch,
        write_percentage: command.write_percentage,
        node_id_range: command.node_id_range.unwrap_or(command.num_nodes),
    };

    let edges = sample_graph(&graph_spec, &mut rng)?;
    let workload = sample_workload(&workload_spec, &mut rng)?;

    ensure_parent_dir(&command.graph_file)?;
    ensure_parent_dir(&command.workload_file)?;
    write_graph_file(&command.graph_file, &edges)?;
    write_workload_file(&command.workload_file, &workload)?;

    info!(
        seed,
        edges = edges.len(),
        batches = workload.len(),
        "fixture generation completed"
    );
    Ok(GenerationSummary {
        seed,
        edges: edges.len(),
        batches: workload.len(),
        ops_per_batch: command.ops_per_batch,
        graph_file: command.graph_file,
        workload_file: command.workload_file,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), CliError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|source| CliError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &GenerationSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "seed: {}", summary.seed)?;
    writeln!(
        writer,
        "graph: {} edges -> {}",
        summary.edges,
        summary.graph_file.display()
    )?;
    writeln!(
        writer,
        "workload: {} batches x {} ops -> {}",
        summary.batches,
        summary.ops_per_batch,
        summary.workload_file.display()
    )?;
    Ok(())
}
