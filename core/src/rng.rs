//! Probability sources for match outcomes.
//!
//! RULE: Simulation never calls a platform RNG directly.
//! Every draw flows through a ProbabilitySource handed in by the caller,
//! so a run is reproducible from its seed and tests can pin outcomes.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Supplies uniform draws in [0.0, 1.0).
pub trait ProbabilitySource {
    fn next_unit(&mut self) -> f64;

    /// Bernoulli trial: returns true with probability p.
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }
}

/// Seeded PCG stream. Same seed, same outcomes.
pub struct MatchRng {
    seed:  u64,
    inner: Pcg64Mcg,
}

impl MatchRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ProbabilitySource for MatchRng {
    fn next_unit(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Returns the same draw every time. 0.0 always favours team 1.
#[derive(Debug, Clone, Copy)]
pub struct FixedDraw(pub f64);

impl ProbabilitySource for FixedDraw {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}
