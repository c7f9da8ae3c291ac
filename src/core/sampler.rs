// File: src/core/sampler.rs
use crate::core::types::{CombinationKey, UsageTable};
use rand::seq::SliceRandom;
use rand::Rng;

/// Default number of combinations practiced per run.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Draws up to `size` distinct combinations, uniformly and without
/// replacement. When there are fewer candidates than `size`, all of them are
/// returned in random order.
pub struct CombinationSampler {
    size: usize,
}

impl CombinationSampler {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn sample<R: Rng + ?Sized>(
        &self,
        candidates: &UsageTable,
        rng: &mut R,
    ) -> Vec<CombinationKey> {
        let keys: Vec<&CombinationKey> = candidates.keys().collect();
        keys.choose_multiple(rng, self.size)
            .map(|&key| key.clone())
            .collect()
    }
}

impl Default for CombinationSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZE)
    }
}
