//! Weighted selection of operation kinds.

use rand::{
    distributions::{Distribution, WeightedIndex},
    rngs::SmallRng,
};

use crate::{error::SampleError, workload::OpKind};

/// Discrete distribution over the three operation kinds.
///
/// Weights are raw non-negative values normalized internally; they need not
/// sum to 100 — selection is proportional to their ratios.
#[derive(Clone, Debug)]
pub struct OperationMix {
    weights: [u32; 3],
    index: WeightedIndex<u32>,
}

impl OperationMix {
    /// Builds the distribution from raw `{query, add, delete}` weights.
    ///
    /// # Errors
    /// Returns [`SampleError::UnusableWeights`] when every weight is zero.
    pub fn from_weights(query: u32, add: u32, delete: u32) -> Result<Self, SampleError> {
        let weights = [query, add, delete];
        let index = WeightedIndex::new(weights).map_err(|err| SampleError::UnusableWeights {
            message: err.to_string(),
        })?;
        Ok(Self { weights, index })
    }

    /// Builds the stock mix for a write percentage: `100 − write_percentage`
    /// queries against an even split of adds and deletes.
    ///
    /// The split uses integer halves, so an odd percentage leaves the two
    /// write weights one tick below the nominal total; the distribution is
    /// proportional, not normalized to 100.
    ///
    /// # Errors
    /// Returns [`SampleError::InvalidWritePercentage`] for values above 100.
    pub fn from_write_percentage(write_percentage: u8) -> Result<Self, SampleError> {
        if write_percentage > 100 {
            return Err(SampleError::InvalidWritePercentage {
                got: write_percentage,
            });
        }
        let query = u32::from(100 - write_percentage);
        let half = u32::from(write_percentage / 2);
        Self::from_weights(query, half, half)
    }

    /// Raw `{query, add, delete}` weights backing the distribution.
    #[must_use]
    pub const fn weights(&self) -> [u32; 3] {
        self.weights
    }

    /// Draws one operation kind.
    pub fn sample(&self, rng: &mut SmallRng) -> OpKind {
        match self.index.sample(rng) {
            0 => OpKind::Query,
            1 => OpKind::Add,
            _ => OpKind::Delete,
        }
    }
}
