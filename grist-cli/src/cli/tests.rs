//! Unit tests for the CLI commands and fixture-file layout.

use super::commands::run_generate;
use super::{Cli, CliError, Command, GenerateCommand, GenerationSummary, render_summary, run_cli};

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use grist_core::SampleError;
use rstest::rstest;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

fn small_command(dir: &TempDir) -> GenerateCommand {
    GenerateCommand {
        num_nodes: 20,
        num_edges: 30,
        num_batches: 4,
        ops_per_batch: 6,
        write_percentage: 50,
        node_id_range: None,
        graph_file: dir.path().join("initial_graph.txt"),
        workload_file: dir.path().join("input"),
        seed: Some(7),
    }
}

/// Splits a workload file into batches by the `F` sentinel, panicking on any
/// malformed line.
fn split_batches(text: &str) -> Vec<Vec<(char, u64, u64)>> {
    let mut batches = Vec::new();
    let mut current = Vec::new();
    for line in text.lines() {
        if line == "F" {
            batches.push(std::mem::take(&mut current));
            continue;
        }
        let mut fields = line.split_whitespace();
        let kind = fields
            .next()
            .and_then(|raw| raw.chars().next())
            .expect("operation line must start with a kind");
        let source: u64 = fields
            .next()
            .and_then(|raw| raw.parse().ok())
            .expect("operation line must carry a source id");
        let target: u64 = fields
            .next()
            .and_then(|raw| raw.parse().ok())
            .expect("operation line must carry a target id");
        current.push((kind, source, target));
    }
    assert!(current.is_empty(), "file must end on a batch sentinel");
    batches
}

#[test]
fn generate_parses_with_stock_defaults() -> TestResult {
    let cli = Cli::try_parse_from(["grist", "generate"])?;
    let Command::Generate(command) = cli.command;
    assert_eq!(command.num_nodes, 1_000);
    assert_eq!(command.num_edges, 500_000);
    assert_eq!(command.num_batches, 1_000);
    assert_eq!(command.ops_per_batch, 10);
    assert_eq!(command.write_percentage, 50);
    assert_eq!(command.node_id_range, None);
    assert_eq!(command.graph_file, PathBuf::from("resources/initial_graph.txt"));
    assert_eq!(command.workload_file, PathBuf::from("resources/input"));
    assert_eq!(command.seed, None);
    Ok(())
}

#[rstest]
#[case("101")]
#[case("200")]
fn clap_rejects_out_of_range_write_percentage(#[case] raw: &str) {
    let result = Cli::try_parse_from(["grist", "generate", "--write-percentage", raw]);
    assert!(result.is_err());
}

#[test]
fn generate_writes_both_fixture_files() -> TestResult {
    let dir = temp_dir();
    let command = small_command(&dir);
    let summary = run_generate(command.clone())?;
    assert_eq!(summary.seed, 7);
    assert_eq!(summary.edges, 30);
    assert_eq!(summary.batches, 4);

    let graph_text = fs::read_to_string(&command.graph_file)?;
    let mut lines: Vec<&str> = graph_text.lines().collect();
    assert_eq!(lines.pop(), Some("S"));
    assert_eq!(lines.len(), 30);
    let parsed: HashSet<&str> = lines.iter().copied().collect();
    assert_eq!(parsed.len(), 30, "edge lines must be distinct");
    for line in lines {
        let mut fields = line.split_whitespace();
        let source: u64 = fields
            .next()
            .and_then(|raw| raw.parse().ok())
            .expect("edge line must start with an integer");
        let target: u64 = fields
            .next()
            .and_then(|raw| raw.parse().ok())
            .expect("edge line must end with an integer");
        assert_ne!(source, target);
        assert!((1..=20_u64).contains(&source));
        assert!((1..=20_u64).contains(&target));
    }

    let workload_text = fs::read_to_string(&command.workload_file)?;
    let batches = split_batches(&workload_text);
    assert_eq!(batches.len(), 4);
    for batch in &batches {
        assert_eq!(batch.len(), 6);
        for &(kind, source, target) in batch {
            assert!(matches!(kind, 'Q' | 'A' | 'D'));
            assert_ne!(source, target);
            assert!((1..=20_u64).contains(&source));
            assert!((1..=20_u64).contains(&target));
        }
    }
    Ok(())
}

#[test]
fn identical_seeds_reproduce_identical_artifacts() -> TestResult {
    let first_dir = temp_dir();
    let second_dir = temp_dir();
    run_generate(small_command(&first_dir))?;
    run_generate(small_command(&second_dir))?;

    let first_graph = fs::read(first_dir.path().join("initial_graph.txt"))?;
    let second_graph = fs::read(second_dir.path().join("initial_graph.txt"))?;
    assert_eq!(first_graph, second_graph);

    let first_workload = fs::read(first_dir.path().join("input"))?;
    let second_workload = fs::read(second_dir.path().join("input"))?;
    assert_eq!(first_workload, second_workload);
    Ok(())
}

#[rstest]
#[case::all_reads(0, |kind: char| kind == 'Q')]
#[case::all_writes(100, |kind: char| kind != 'Q')]
fn write_percentage_extremes_pin_the_operation_kinds(
    #[case] write_percentage: u8,
    #[case] accepts: fn(char) -> bool,
) -> TestResult {
    let dir = temp_dir();
    let command = GenerateCommand {
        write_percentage,
        num_batches: 10,
        ..small_command(&dir)
    };
    run_generate(command.clone())?;
    let workload_text = fs::read_to_string(&command.workload_file)?;
    for batch in split_batches(&workload_text) {
        for (kind, _, _) in batch {
            assert!(accepts(kind), "unexpected kind {kind} at {write_percentage}%");
        }
    }
    Ok(())
}

#[test]
fn capacity_violations_surface_as_sample_errors() {
    let dir = temp_dir();
    let command = GenerateCommand {
        num_nodes: 4,
        num_edges: 13,
        ..small_command(&dir)
    };
    let err = match run_generate(command) {
        Ok(_) => panic!("capacity violation must fail"),
        Err(err) => err,
    };
    assert!(matches!(
        err,
        CliError::Sample(SampleError::EdgeCapacityExceeded { .. })
    ));
}

#[test]
fn missing_parent_directories_are_created() -> TestResult {
    let dir = temp_dir();
    let command = GenerateCommand {
        graph_file: dir.path().join("nested").join("graph").join("initial.txt"),
        workload_file: dir.path().join("nested").join("input"),
        ..small_command(&dir)
    };
    run_generate(command.clone())?;
    assert!(command.graph_file.exists());
    assert!(command.workload_file.exists());
    Ok(())
}

#[test]
fn run_cli_dispatches_the_generate_command() -> TestResult {
    let dir = temp_dir();
    let cli = Cli {
        command: Command::Generate(small_command(&dir)),
    };
    let summary = run_cli(cli)?;
    assert_eq!(summary.edges, 30);
    Ok(())
}

#[test]
fn render_summary_reports_seed_and_artifacts() -> TestResult {
    let summary = GenerationSummary {
        seed: 42,
        edges: 500,
        batches: 10,
        ops_per_batch: 10,
        graph_file: PathBuf::from("resources/initial_graph.txt"),
        workload_file: PathBuf::from("resources/input"),
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert!(text.contains("seed: 42"));
    assert!(text.contains("graph: 500 edges -> resources/initial_graph.txt"));
    assert!(text.contains("workload: 10 batches x 10 ops -> resources/input"));
    Ok(())
}
