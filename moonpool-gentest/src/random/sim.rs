//! Seedable random provider backed by ChaCha8.

use super::RandomProvider;
use rand::distr::uniform::SampleUniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::Range;

/// Deterministic random provider owned by a single generator.
///
/// The same seed always produces the same sequence of values.
#[derive(Clone, Debug)]
pub struct SimRandomProvider {
    rng: ChaCha8Rng,
}

impl SimRandomProvider {
    /// Create a new provider with the specified seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for SimRandomProvider {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomProvider for SimRandomProvider {
    fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    fn random_range<T>(&mut self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.rng.random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(provider: &mut SimRandomProvider, count: usize) -> Vec<u64> {
        (0..count).map(|_| provider.random_range(0..u64::MAX)).collect()
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut provider = SimRandomProvider::new(7);
        let first = draws(&mut provider, 4);

        provider.reseed(7);
        assert_eq!(first, draws(&mut provider, 4));

        // a fresh provider on the same seed walks the same stream
        assert_eq!(first, draws(&mut SimRandomProvider::new(7), 4));

        provider.reseed(8);
        assert_ne!(first, draws(&mut provider, 4));
    }

    #[test]
    fn test_random_range() {
        let mut provider = SimRandomProvider::new(123);
        for _ in 0..100 {
            let value = provider.random_range(10u64..20);
            assert!((10..20).contains(&value));
        }
    }
}
