//! Random number generation provider abstraction.
//!
//! Each generator owns its provider, so there is no process-wide random
//! stream. Providers are reseeded at the start of every run.

use rand::distr::uniform::SampleUniform;
use std::ops::Range;
use std::time::{SystemTime, UNIX_EPOCH};

pub mod sim;

/// Provider trait for random number generation.
///
/// Implementations decide where randomness comes from. The generator only
/// needs to reseed the provider and draw bounded integers from it.
pub trait RandomProvider {
    /// Reset the provider to the deterministic stream identified by `seed`.
    fn reseed(&mut self, seed: u64);

    /// Generate a random value within a specified range.
    ///
    /// The range is exclusive of the upper bound (start..end).
    fn random_range<T>(&mut self, range: Range<T>) -> T
    where
        T: SampleUniform + PartialOrd;
}

/// Derive a seed from the wall clock.
///
/// Runs started within the same clock tick get the same seed, which is why
/// the generator logs every seed it uses.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
