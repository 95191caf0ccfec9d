//! Injectable randomness.
//!
//! The engine draws randomness in exactly two places: initial placement
//! (N distinct cells out of L) and the per-vehicle Bernoulli trial of the
//! randomization phase.  Both go through [`RandomSource`] so tests can script
//! the draws and runs can be replayed from a seed.
//!
//! # Stream derivation
//!
//! Independent runs (e.g. the points of a parameter sweep) each get their own
//! `SimRng` seeded by:
//!
//!   seed = global_seed XOR (stream * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive stream indices uniformly across the seed space,
//! so results do not depend on the order streams are run in.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The randomness the update engine consumes.
pub trait RandomSource {
    /// `amount` distinct indices drawn uniformly from `0..length`, in any
    /// order.
    ///
    /// Callers guarantee `amount <= length`.
    fn sample_distinct(&mut self, length: usize, amount: usize) -> Vec<usize>;

    /// `true` with probability `p`.
    fn bernoulli(&mut self, p: f64) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn sample_distinct(&mut self, length: usize, amount: usize) -> Vec<usize> {
        (**self).sample_distinct(length, amount)
    }

    #[inline]
    fn bernoulli(&mut self, p: f64) -> bool {
        (**self).bernoulli(p)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded default [`RandomSource`] backed by `SmallRng`.
///
/// Used only in single-threaded contexts.  For parallel work give each worker
/// its own `SimRng` via [`for_stream`](Self::for_stream).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically from a run's global seed and a stream index.
    pub fn for_stream(global_seed: u64, stream: u64) -> Self {
        SimRng::new(global_seed ^ stream.wrapping_mul(MIXING_CONSTANT))
    }
}

impl RandomSource for SimRng {
    fn sample_distinct(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }

    /// `p` is clamped to `[0, 1]`.
    #[inline]
    fn bernoulli(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
