use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Uniform sampling without replacement backed by a small, seedable PRNG.
#[derive(Clone, Debug)]
pub struct RandomSampler {
    rng: SmallRng,
}

impl RandomSampler {
    /// Deterministic sampler, the same seed always yields the same layouts.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl MineSampler for RandomSampler {
    fn sample(&mut self, candidates: &[Coord2], amount: usize) -> Vec<Coord2> {
        let amount = amount.min(candidates.len());
        rand::seq::index::sample(&mut self.rng, candidates.len(), amount)
            .into_iter()
            .map(|index| candidates[index])
            .collect()
    }
}
