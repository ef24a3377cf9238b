//! Two-file plain-text serialization of sampled fixtures.
//!
//! The initial graph is one `"<u> <v>"` line per edge terminated by the
//! sentinel line `S`; the workload is one `"<kind> <u> <v>"` line per
//! operation with each batch terminated by the sentinel line `F`. Files are
//! opened, written sequentially, flushed, and closed within a single scope.
//! There is no atomic replace and no fsync: an I/O failure mid-write leaves
//! the file incomplete and surfaces the underlying error.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{info, instrument};

use crate::{error::WriteError, graph::Edge, workload::Workload};

/// Sentinel line marking the end of the initial-graph file.
pub const GRAPH_SENTINEL: &str = "S";
/// Sentinel line flushing one batch in the workload file.
pub const BATCH_SENTINEL: &str = "F";

/// Writes the edge set, one `"<u> <v>"` line per edge, then the `S`
/// sentinel.
///
/// Set iteration order is unspecified; the harness treats the file as a
/// set, so the order of edge lines carries no meaning.
///
/// # Errors
/// Returns [`io::Error`] when the underlying writer fails.
pub fn write_graph(mut writer: impl Write, edges: &HashSet<Edge>) -> io::Result<()> {
    for edge in edges {
        writeln!(writer, "{} {}", edge.source, edge.target)?;
    }
    writeln!(writer, "{GRAPH_SENTINEL}")
}

/// Writes each batch as its operation lines, in generation order, followed
/// by the `F` sentinel.
///
/// # Errors
/// Returns [`io::Error`] when the underlying writer fails.
pub fn write_workload(mut writer: impl Write, workload: &Workload) -> io::Result<()> {
    for batch in workload.batches() {
        for op in batch {
            writeln!(writer, "{} {} {}", op.kind.code(), op.source, op.target)?;
        }
        writeln!(writer, "{BATCH_SENTINEL}")?;
    }
    Ok(())
}

/// Opens `path`, writes the initial-graph file, and flushes it.
///
/// # Errors
/// Returns [`WriteError::Io`] carrying the failing path; the file may be
/// left incomplete.
#[instrument(name = "serialize.graph", skip(edges), fields(path = %path.display()))]
pub fn write_graph_file(path: &Path, edges: &HashSet<Edge>) -> Result<(), WriteError> {
    with_file(path, |writer| write_graph(writer, edges))?;
    info!(edges = edges.len(), "initial graph written");
    Ok(())
}

/// Opens `path`, writes the workload file, and flushes it.
///
/// # Errors
/// Returns [`WriteError::Io`] carrying the failing path; the file may be
/// left incomplete.
#[instrument(name = "serialize.workload", skip(workload), fields(path = %path.display()))]
pub fn write_workload_file(path: &Path, workload: &Workload) -> Result<(), WriteError> {
    with_file(path, |writer| write_workload(writer, workload))?;
    info!(batches = workload.len(), "workload written");
    Ok(())
}

fn with_file(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<(), WriteError> {
    File::create(path)
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer.flush()
        })
        .map_err(|source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        })
}
