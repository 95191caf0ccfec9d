//! Density × slowing-probability sweeps.
//!
//! Each grid point is an independent run; its metric is the time-averaged
//! velocity (the mean of the whole series, initial state included).  Point
//! `k` in row-major `(p, ρ)` order draws from `SimRng::for_stream(seed, k)`,
//! so a sweep is reproducible and does not depend on execution order.

use nasch_core::{ModelParams, SimRng};
use tracing::info;

use crate::{Engine, EngineBuilder, SimError, SimResult};

/// Grid and shared parameters for [`sweep`].
#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    pub lane_length:           usize,
    pub max_velocity:          u32,
    pub steps:                 u64,
    pub seed:                  u64,
    pub slowing_probabilities: Vec<f64>,
    pub densities:             Vec<f64>,
}

impl Default for SweepConfig {
    /// 100-cell ring, `v_max = 5`, 100 steps, p ∈ {0.2, 0.5, 0.7},
    /// 17 densities from 0.1 to 0.9.
    fn default() -> Self {
        Self {
            lane_length:           100,
            max_velocity:          5,
            steps:                 100,
            seed:                  42,
            slowing_probabilities: vec![0.2, 0.5, 0.7],
            densities:             linspace(0.1, 0.9, 17),
        }
    }
}

/// One grid point's result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepPoint {
    pub slowing_probability: f64,
    pub density:             f64,
    pub mean_velocity:       f64,
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Mean of a metric series; `0.0` for an empty one.
pub fn time_averaged_velocity(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().sum::<f64>() / series.len() as f64
}

/// Run every `(p, ρ)` pair and return results in row-major order.
///
/// All points are validated before any runs, so one bad density fails the
/// whole sweep up front.
pub fn sweep(config: &SweepConfig) -> SimResult<Vec<SweepPoint>> {
    if config.slowing_probabilities.is_empty() || config.densities.is_empty() {
        return Err(SimError::Sweep("empty parameter grid".into()));
    }

    let mut jobs: Vec<(ModelParams, Engine<SimRng>)> = Vec::new();
    for &p in &config.slowing_probabilities {
        for &rho in &config.densities {
            let params = ModelParams::new(config.lane_length, rho, config.max_velocity, p);
            let stream = jobs.len() as u64;
            let engine = EngineBuilder::new(params)
                .rng(SimRng::for_stream(config.seed, stream))
                .build()?;
            jobs.push((params, engine));
        }
    }

    info!(points = jobs.len(), steps = config.steps, "sweep started");
    let steps = config.steps;
    let run_point = move |(params, mut engine): (ModelParams, Engine<SimRng>)| SweepPoint {
        slowing_probability: params.slowing_probability,
        density:             params.density,
        mean_velocity:       time_averaged_velocity(&engine.run(steps)),
    };

    #[cfg(not(feature = "parallel"))]
    let points: Vec<SweepPoint> = jobs.into_iter().map(run_point).collect();

    #[cfg(feature = "parallel")]
    let points: Vec<SweepPoint> = {
        use rayon::prelude::*;
        jobs.into_par_iter().map(run_point).collect()
    };

    Ok(points)
}
