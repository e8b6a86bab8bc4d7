//! Seeded random source threaded through every randomized layout decision

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Deterministic random source owned by a single layout computation
///
/// Every randomized choice draws from this instance, never from a global
/// generator, so identical inputs and seed reproduce identical layouts and
/// concurrent computations never share state.
#[derive(Debug, Clone)]
pub struct LayoutRng {
    rng: StdRng,
}

impl LayoutRng {
    /// Create a deterministic generator
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform value in `[0, 1)`
    pub fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform value in `[low, high)`; returns `low` for an empty range
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high > low {
            self.unit().mul_add(high - low, low)
        } else {
            low
        }
    }

    /// Uniform value in `[center - spread, center + spread)`
    pub fn jitter(&mut self, center: f64, spread: f64) -> f64 {
        self.uniform(center - spread.abs(), center + spread.abs())
    }

    /// Uniform index in `0..len`; zero for an empty range
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.rng.random_range(0..len)
        }
    }

    /// Independent generator for a sub-computation, derived from this stream
    pub fn fork(&mut self) -> Self {
        Self::new(self.rng.random::<u64>())
    }
}
