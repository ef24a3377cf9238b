//! Batched operation sampling.
//!
//! Builds the ordered workload the replay harness applies against the
//! initial graph: `num_batches` batches of exactly `ops_per_batch`
//! operations each, kinds drawn from an [`OperationMix`].

use rand::{Rng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{config::WorkloadSpec, error::SampleError, graph::NodeId, mix::OperationMix};

/// Kind of a graph operation replayed by the consuming harness.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OpKind {
    /// Read an edge.
    Query,
    /// Insert an edge.
    Add,
    /// Remove an edge.
    Delete,
}

impl OpKind {
    /// Single-character wire code (`Q`, `A`, or `D`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Query => 'Q',
            Self::Add => 'A',
            Self::Delete => 'D',
        }
    }
}

/// One immutable graph operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Operation {
    /// What the harness should do with the edge.
    pub kind: OpKind,
    /// Tail endpoint.
    pub source: NodeId,
    /// Head endpoint.
    pub target: NodeId,
}

/// A fixed-size, order-preserving group of operations applied together.
pub type Batch = Vec<Operation>;

/// The full ordered sequence of batches for one run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Workload {
    batches: Vec<Batch>,
}

impl Workload {
    /// Wraps pre-built batches in replay order.
    #[must_use]
    pub fn from_batches(batches: Vec<Batch>) -> Self {
        Self { batches }
    }

    /// Read-only view of the batches in generation order.
    #[must_use]
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Number of batches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// Whether the workload holds no batches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

const BATCH_PROGRESS_INTERVAL: usize = 100;

/// Samples one batch of exactly `num_operations` operations.
///
/// The kind of each operation comes from `mix`; endpoints are drawn
/// uniformly from `1..=node_id_range`, re-drawing the second endpoint alone
/// until it differs from the first. The re-draw deliberately never touches
/// the first endpoint; unifying it with the edge sampler's set-absorption
/// strategy would shift the output distribution.
///
/// # Errors
/// Returns [`SampleError::DegenerateNodeRange`] when the range cannot
/// supply two distinct endpoints.
pub fn sample_batch(
    num_operations: usize,
    mix: &OperationMix,
    node_id_range: u64,
    rng: &mut SmallRng,
) -> Result<Batch, SampleError> {
    if node_id_range < 2 {
        return Err(SampleError::DegenerateNodeRange {
            num_nodes: node_id_range,
        });
    }
    let mut batch = Vec::with_capacity(num_operations);
    for _ in 0..num_operations {
        let kind = mix.sample(rng);
        let source = rng.gen_range(1..=node_id_range);
        let mut target = rng.gen_range(1..=node_id_range);
        while target == source {
            target = rng.gen_range(1..=node_id_range);
        }
        batch.push(Operation {
            kind,
            source,
            target,
        });
    }
    Ok(batch)
}

/// Samples the full workload described by `spec`.
///
/// Progress is reported through `tracing` every 100 batches.
///
/// # Errors
/// Propagates [`SampleError`] from mix construction and batch sampling.
#[instrument(
    name = "workload.sample",
    skip(spec, rng),
    fields(
        num_batches = spec.num_batches,
        ops_per_batch = spec.ops_per_batch,
        write_percentage = spec.write_percentage,
    ),
)]
pub fn sample_workload(spec: &WorkloadSpec, rng: &mut SmallRng) -> Result<Workload, SampleError> {
    let mix = OperationMix::from_write_percentage(spec.write_percentage)?;
    let mut batches = Vec::with_capacity(spec.num_batches);
    for index in 0..spec.num_batches {
        if index % BATCH_PROGRESS_INTERVAL == 0 {
            info!(
                batch = index,
                total = spec.num_batches,
                "workload sampling progress"
            );
        }
        batches.push(sample_batch(
            spec.ops_per_batch,
            &mix,
            spec.node_id_range,
            rng,
        )?);
    }
    Ok(Workload { batches })
}
