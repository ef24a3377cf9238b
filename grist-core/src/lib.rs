//! Grist core library.
//!
//! Manufactures synthetic workload fixtures for a graph-processing system
//! under test: an initial directed edge set sampled uniformly without
//! duplicates, and a batched weighted-random operation workload, both
//! serialized in the plain-text format the replay harness consumes.
//!
//! Every sampler takes an explicit [`rand::rngs::SmallRng`] handle, so a
//! fixed seed reproduces a run byte for byte.

mod config;
mod error;
mod graph;
mod mix;
mod serialize;
mod workload;

pub use crate::{
    config::{
        DEFAULT_GRAPH_FILENAME, DEFAULT_NUM_BATCHES, DEFAULT_NUM_EDGES, DEFAULT_NUM_NODES,
        DEFAULT_OPS_PER_BATCH, DEFAULT_WORKLOAD_FILENAME, DEFAULT_WRITE_PERCENTAGE, GraphSpec,
        WorkloadSpec,
    },
    error::{SampleError, WriteError},
    graph::{Edge, NodeId, sample_graph},
    mix::OperationMix,
    serialize::{
        BATCH_SENTINEL, GRAPH_SENTINEL, write_graph, write_graph_file, write_workload,
        write_workload_file,
    },
    workload::{Batch, OpKind, Operation, Workload, sample_batch, sample_workload},
};
