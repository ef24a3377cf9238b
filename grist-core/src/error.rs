//! Error types for the grist core library.
//!
//! Sampling preconditions surface as [`SampleError`]; filesystem failures
//! during serialization surface as [`WriteError`] carrying the untouched
//! operating-system error.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while sampling graphs or workloads.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SampleError {
    /// Requested more distinct edges than the node range can provide.
    #[error(
        "cannot sample {requested} distinct edges: {num_nodes} nodes admit only {capacity} ordered non-self-loop pairs"
    )]
    EdgeCapacityExceeded {
        /// Target edge count supplied by the caller.
        requested: usize,
        /// Number of distinct ordered pairs the node range admits.
        capacity: u128,
        /// Upper bound of the node id range.
        num_nodes: u64,
    },
    /// The node id range cannot form a single non-self-loop pair.
    #[error("node id range must contain at least two ids (got {num_nodes})")]
    DegenerateNodeRange {
        /// Upper bound of the offending node id range.
        num_nodes: u64,
    },
    /// Write percentage outside `0..=100`.
    #[error("write percentage must be at most 100 (got {got})")]
    InvalidWritePercentage {
        /// Value supplied by the caller.
        got: u8,
    },
    /// The operation kind weights describe an empty distribution.
    #[error("operation kind weights are unusable: {message}")]
    UnusableWeights {
        /// Reason reported by the weighted-index construction.
        message: String,
    },
}

/// Errors raised while writing fixture files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Filesystem open or write failed; the target file may be incomplete.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path of the file being written.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}
