//! Deterministic per-resident and engine-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Population sampling draws from one engine-level [`SimRng`] seeded with the
//! configured seed, so the same seed always yields the same population.
//!
//! Each resident then gets its own independent `SmallRng` for the daily
//! health draws, seeded by:
//!
//!   seed = global_seed XOR ((resident_id + 1) * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive resident IDs uniformly across the seed space.
//! The constant is odd, so the product is never zero and no resident stream
//! replays the engine stream seeded with `global_seed` itself.
//! This means:
//!
//! - Residents never share RNG state, so the order in which the day loop
//!   visits them (sequential or on a Rayon pool) does not change results.
//! - Every living resident consumes a fixed number of draws per day no matter
//!   what happened to it, so a baseline engine and an intervention engine
//!   built from the same seed keep each resident's stream aligned day by day.
//!   Differences in outcome come from the interventions, not from the streams
//!   drifting apart.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ResidentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── ResidentRng ───────────────────────────────────────────────────────────────

/// Per-resident deterministic RNG.
///
/// Created once per resident at population generation and stored in a
/// parallel `Vec<ResidentRng>` alongside the residents themselves.
#[derive(Clone, Debug)]
pub struct ResidentRng(SmallRng);

impl ResidentRng {
    /// Seed deterministically from the run's global seed and a resident ID.
    pub fn new(global_seed: u64, resident: ResidentId) -> Self {
        let seed = global_seed ^ (resident.0 as u64 + 1).wrapping_mul(MIXING_CONSTANT);
        ResidentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Engine-level RNG for population sampling and temperature synthesis.
///
/// Used only in single-threaded contexts.  Never share one instance between
/// engines that run concurrently; give each engine its own, built from the
/// same seed, to keep runs reproducible.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, leaving the
    /// parent stream usable for other purposes.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}
