#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::compare_floats;
use rand::prelude::*;
use std::sync::{Arc, Mutex};

/// Provides the way to use randomized values in generic way.
pub trait Random: Send + Sync {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: f64, max: f64) -> f64;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: f64) -> bool;

    /// Returns an index from collection with probability weight.
    /// Uses exponential distribution where the weights are the rate of the distribution (lambda)
    /// and selects the smallest sampled value.
    fn weighted(&self, weights: &[f64]) -> usize;

    /// Returns RNG.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation. All values are drawn from one shared stream, so
/// a repeatable instance reproduces the same sequence of decisions.
#[derive(Clone, Debug)]
pub struct DefaultRandom {
    rng: RandomGen,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with a fixed seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: RandomGen::new_repeatable(seed) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RandomGen::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..=max)
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        if (min - max).abs() < f64::EPSILON {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max)
    }

    fn is_hit(&self, probability: f64) -> bool {
        self.get_rng().gen_bool(probability.clamp(0., 1.))
    }

    fn weighted(&self, weights: &[f64]) -> usize {
        weights
            .iter()
            .zip(0_usize..)
            .map(|(&weight, index)| (-self.uniform_real(0., 1.).ln() / weight, index))
            .min_by(|a, b| compare_floats(a.0, b.0))
            .map_or(0, |(_, index)| index)
    }

    fn get_rng(&self) -> RandomGen {
        self.rng.clone()
    }
}

/// Specifies underlying random generator type. Clones share the same generator state.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: Arc<Mutex<SmallRng>>,
}

impl RandomGen {
    /// Creates a new instance of `RandomGen` which owns given small rng.
    pub fn new(rng: SmallRng) -> Self {
        Self { rng: Arc::new(Mutex::new(rng)) }
    }

    /// Creates a new instance of `RandomGen` seeded with given value.
    pub fn new_repeatable(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    fn with_rng<T>(&self, action: impl FnOnce(&mut SmallRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        action(&mut rng)
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.with_rng(|rng| rng.next_u32())
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.with_rng(|rng| rng.next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.with_rng(|rng| rng.fill_bytes(dest))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.with_rng(|rng| rng.try_fill_bytes(dest))
    }
}
