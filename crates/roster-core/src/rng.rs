//! Deterministic RNG wrapper for the roster pipeline.
//!
//! The only randomness in the whole pipeline is the tie-break jitter added to
//! first-pass assignment scores.  It is drawn from a `RosterRng` that callers
//! construct from a seed and pass in explicitly, so a run is reproducible
//! from `RosterConfig::seed` alone.
//!
//! Per-attempt streams are derived with [`RosterRng::child`]:
//!
//!   seed = parent_draw XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Pipeline-level RNG.
///
/// Used only in single-threaded contexts; the assignment engine never shares
/// one across threads.
pub struct RosterRng(SmallRng);

impl RosterRng {
    pub fn new(seed: u64) -> Self {
        RosterRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `RosterRng` with a different seed offset, e.g. one per
    /// assignment attempt.
    pub fn child(&mut self, offset: u64) -> RosterRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        RosterRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform jitter in `[0, max)`.  Returns exactly `0.0` without drawing
    /// when `max <= 0`, so disabled jitter leaves the stream untouched.
    #[inline]
    pub fn jitter(&mut self, max: f64) -> f64 {
        if max > 0.0 {
            self.0.gen_range(0.0..max)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
