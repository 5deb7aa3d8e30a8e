use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of the feed's randomness, swappable so tests can script it.
pub trait RandomSource {
    /// Uniform in `low..=high`.
    fn between(&mut self, low: u64, high: u64) -> u64;

    /// Uniform in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
}

#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn between(&mut self, low: u64, high: u64) -> u64 {
        self.rng.gen_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
