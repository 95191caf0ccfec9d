//! Model parameters and run configuration.

use crate::{ConfigError, ConfigResult};

// ── ModelParams ───────────────────────────────────────────────────────────────

/// The four Nagel-Schreckenberg parameters.  Immutable once an engine is
/// built from them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelParams {
    /// Number of cells on the circular lane (L).
    pub lane_length: usize,

    /// Fraction of occupied cells (ρ), in `(0, 1]`.
    pub density: f64,

    /// Velocity cap in cells per step.
    pub max_velocity: u32,

    /// Per-vehicle, per-step probability of a random slowdown (p), in `[0, 1]`.
    pub slowing_probability: f64,
}

impl ModelParams {
    pub fn new(
        lane_length:         usize,
        density:             f64,
        max_velocity:        u32,
        slowing_probability: f64,
    ) -> Self {
        Self { lane_length, density, max_velocity, slowing_probability }
    }

    /// Derived vehicle count `N = round(L·ρ)`.
    ///
    /// Ties round to even, so `L = 5, ρ = 0.5` places 2 vehicles.  Not
    /// validated; call [`validate`](Self::validate) for a checked count.
    pub fn vehicle_count(&self) -> usize {
        let n = (self.lane_length as f64 * self.density).round_ties_even();
        if n.is_finite() && n > 0.0 { n as usize } else { 0 }
    }

    /// Check every constraint and return the vehicle count on success.
    pub fn validate(&self) -> ConfigResult<usize> {
        if self.lane_length == 0 {
            return Err(ConfigError::EmptyLane);
        }
        // Written as negated ranges so NaN is rejected too.
        if !(self.density > 0.0 && self.density <= 1.0) {
            return Err(ConfigError::Density(self.density));
        }
        if !(0.0..=1.0).contains(&self.slowing_probability) {
            return Err(ConfigError::SlowingProbability(self.slowing_probability));
        }

        let count = self.vehicle_count();
        if count > self.lane_length {
            return Err(ConfigError::TooManyVehicles {
                count,
                lane_length: self.lane_length,
            });
        }
        if count == 0 {
            return Err(ConfigError::NoVehicles {
                lane_length: self.lane_length,
                density:     self.density,
            });
        }
        Ok(count)
    }
}

impl Default for ModelParams {
    /// The configuration used for the animated example run: a 100-cell ring
    /// at 60% occupancy.
    fn default() -> Self {
        Self::new(100, 0.6, 5, 0.2)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the engine builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    pub params: ModelParams,

    /// Number of update steps to run.
    pub steps: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Forward a lane snapshot to the frame sink after every step.
    pub visualization: bool,

    /// Playback rate passed to the sink when assembling the animation.
    pub frames_per_second: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            params:            ModelParams::default(),
            steps:             100,
            seed:              42,
            visualization:     false,
            frames_per_second: 10,
        }
    }
}
