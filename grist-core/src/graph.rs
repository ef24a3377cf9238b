//! Initial-graph sampling.
//!
//! Draws a target number of unique, non-self-loop directed edges over a
//! fixed node-id range. Duplicate draws are absorbed by the accumulating
//! set, so the loop terminates exactly when the target cardinality is
//! reached.

use std::collections::HashSet;

use rand::{Rng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{config::GraphSpec, error::SampleError};

/// Identifier of a graph vertex; nodes carry no other state.
pub type NodeId = u64;

/// A directed edge between two distinct nodes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    /// Tail of the edge.
    pub source: NodeId,
    /// Head of the edge.
    pub target: NodeId,
}

const PROGRESS_INTERVAL: usize = 100_000;

/// Samples exactly `spec.num_edges` distinct directed edges.
///
/// Both endpoints are drawn independently and uniformly from
/// `1..=spec.num_nodes`. Self-loop draws are discarded without counting as
/// progress, and a pair that is already present is silently absorbed by the
/// set. Progress is reported through `tracing` every 100 000 distinct edges.
///
/// # Errors
/// Returns [`SampleError::EdgeCapacityExceeded`] when the target exceeds the
/// `num_nodes × (num_nodes − 1)` distinct pairs available, and
/// [`SampleError::DegenerateNodeRange`] when edges are requested from a
/// range that cannot form one.
#[instrument(
    name = "graph.sample",
    skip(spec, rng),
    fields(num_nodes = spec.num_nodes, num_edges = spec.num_edges),
)]
pub fn sample_graph(spec: &GraphSpec, rng: &mut SmallRng) -> Result<HashSet<Edge>, SampleError> {
    if spec.num_edges == 0 {
        return Ok(HashSet::new());
    }
    if spec.num_nodes < 2 {
        return Err(SampleError::DegenerateNodeRange {
            num_nodes: spec.num_nodes,
        });
    }
    let capacity = spec.pair_capacity();
    if spec.num_edges as u128 > capacity {
        return Err(SampleError::EdgeCapacityExceeded {
            requested: spec.num_edges,
            capacity,
            num_nodes: spec.num_nodes,
        });
    }

    let mut edges = HashSet::with_capacity(spec.num_edges);
    let mut next_report = PROGRESS_INTERVAL;
    while edges.len() < spec.num_edges {
        let source = rng.gen_range(1..=spec.num_nodes);
        let target = rng.gen_range(1..=spec.num_nodes);
        if source == target {
            continue;
        }
        if edges.insert(Edge { source, target }) && edges.len() >= next_report {
            info!(edges = edges.len(), "graph sampling progress");
            next_report += PROGRESS_INTERVAL;
        }
    }
    Ok(edges)
}
