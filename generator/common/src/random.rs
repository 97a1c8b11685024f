//! Re-export of [`generator_core::weight`] + seeded weight sampling and seed generation.

pub use generator_core::weight::*;

use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::GeneratorError;

/// Generate a seed value.
///
/// Draws from the thread-local, OS-seeded generator.
/// Used whenever the caller does not pin the seed, so every run still has a seed it can log.
pub fn generate_seed() -> u64 {
    rand::thread_rng().gen()
}

/// Source of edge weights, uniform over a [`WeightRange`].
///
/// Two samplers built from the same range and seed yield the same sequence.
#[derive(Clone, Debug)]
pub struct WeightSampler {
    rng: Xoshiro256PlusPlus,
    dist: Uniform<u32>,
}

impl WeightSampler {
    /// Create a new sampler.
    ///
    /// # Arguments
    /// * `range` - The closed range weights are drawn from.
    /// * `seed` - The seed for the underlying generator.
    pub fn new(range: WeightRange, seed: u64) -> Result<Self, GeneratorError> {
        if !range.is_valid() {
            return Err(GeneratorError::invalid_argument(format!(
                "weight range [{}, {}] must be non-empty and start at 1 or above",
                range.min, range.max
            )));
        }
        Ok(WeightSampler {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            dist: Uniform::new_inclusive(range.min, range.max),
        })
    }

    /// Draw the next weight.
    pub fn sample(&mut self) -> u32 {
        self.dist.sample(&mut self.rng)
    }
}

impl Iterator for WeightSampler {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.sample())
    }
}
