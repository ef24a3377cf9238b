//! Generation parameters and their stock defaults.
//!
//! The defaults mirror the fixture sizes the downstream harness is exercised
//! with; the CLI exposes each one as a flag.

/// Default upper bound of the node id range.
pub const DEFAULT_NUM_NODES: u64 = 1_000;
/// Default number of distinct edges in the initial graph.
pub const DEFAULT_NUM_EDGES: usize = 500_000;
/// Default number of batches in the workload.
pub const DEFAULT_NUM_BATCHES: usize = 1_000;
/// Default number of operations per batch.
pub const DEFAULT_OPS_PER_BATCH: usize = 10;
/// Default percentage of operations that are writes.
pub const DEFAULT_WRITE_PERCENTAGE: u8 = 50;
/// Default output path for the initial-graph file.
pub const DEFAULT_GRAPH_FILENAME: &str = "resources/initial_graph.txt";
/// Default output path for the workload file.
pub const DEFAULT_WORKLOAD_FILENAME: &str = "resources/input";

/// Parameters for the initial-graph sampler.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphSpec {
    /// Node ids are drawn uniformly from `1..=num_nodes`.
    pub num_nodes: u64,
    /// Exact number of distinct edges to sample.
    pub num_edges: usize,
}

impl GraphSpec {
    /// Number of distinct ordered non-self-loop pairs the node range admits.
    ///
    /// Computed in 128 bits so `num_nodes` near `u64::MAX` cannot overflow.
    #[must_use]
    pub const fn pair_capacity(&self) -> u128 {
        let nodes = self.num_nodes as u128;
        nodes * nodes.saturating_sub(1)
    }
}

impl Default for GraphSpec {
    fn default() -> Self {
        Self {
            num_nodes: DEFAULT_NUM_NODES,
            num_edges: DEFAULT_NUM_EDGES,
        }
    }
}

/// Parameters for workload sampling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WorkloadSpec {
    /// Number of batches to sample.
    pub num_batches: usize,
    /// Number of operations in every batch.
    pub ops_per_batch: usize,
    /// Percentage of operations that are writes, split evenly between adds
    /// and deletes.
    pub write_percentage: u8,
    /// Operation endpoints are drawn uniformly from `1..=node_id_range`.
    ///
    /// Configured independently of [`GraphSpec::num_nodes`], though the two
    /// are equal in the stock configuration.
    pub node_id_range: u64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            num_batches: DEFAULT_NUM_BATCHES,
            ops_per_batch: DEFAULT_OPS_PER_BATCH,
            write_percentage: DEFAULT_WRITE_PERCENTAGE,
            node_id_range: DEFAULT_NUM_NODES,
        }
    }
}
