//! Deterministic random streams.
//!
//! # Determinism strategy
//!
//! There is no process-wide seed.  Every run owns a root `SimRng` built from
//! its configured seed, and hands each stochastic component its own child
//! stream:
//!
//!   root  = SmallRng(seed)
//!   child = SmallRng(root.next_u64() XOR (offset * MIXING_CONSTANT))
//!
//! The arrival process and the service pool draw from different children, so
//! a change in how many service times are sampled (e.g. more agents) never
//! shifts the arrival sequence of the same seed.  Sweeps derive one root per
//! run with [`SimRng::derived`], so concurrently running simulations never
//! share RNG state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A seeded random stream owned by exactly one simulation component.
///
/// Not `Sync`: a stream is never shared.  To randomize in several places,
/// split it with [`SimRng::child`].
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically from a global seed and a stream number, without
    /// consuming anything from another stream.
    pub fn derived(global_seed: u64, stream: u64) -> Self {
        SimRng::new(global_seed ^ stream.wrapping_mul(MIXING_CONSTANT))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand_distr` distribution
    /// types (`rng.inner().sample(Exp1)`, …).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
