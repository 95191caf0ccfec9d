//! Fluent builder for constructing an [`Engine`].

use nasch_core::{ModelParams, RandomSource, SimConfig, SimRng, Step};
use nasch_lane::Lane;

use crate::{Engine, EngineState, SimError, SimResult};

/// Fluent builder for [`Engine<R>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                               |
/// |---------------------------|---------------------------------------|
/// | `.seed(s)` / `.rng(r)`    | `SimRng` seeded with `SimConfig`'s default seed |
/// | `.visualization(b)`       | `false`                               |
/// | `.frames_per_second(f)`   | `10`                                  |
/// | `.initial_positions(v)`   | `round(L·ρ)` cells drawn from the RNG |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(ModelParams::new(100, 0.6, 5, 0.2))
///     .seed(7)
///     .visualization(true)
///     .build()?;
/// let report = engine.run_with(100, &mut sink, &mut NoopObserver);
/// ```
pub struct EngineBuilder<R: RandomSource = SimRng> {
    params:            ModelParams,
    rng:               R,
    visualization:     bool,
    frames_per_second: u32,
    positions:         Option<Vec<usize>>,
}

impl EngineBuilder<SimRng> {
    pub fn new(params: ModelParams) -> Self {
        let defaults = SimConfig::default();
        Self {
            params,
            rng:               SimRng::new(defaults.seed),
            visualization:     defaults.visualization,
            frames_per_second: defaults.frames_per_second,
            positions:         None,
        }
    }

    /// Take parameters, seed, and visualization settings from a run config.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.params)
            .seed(config.seed)
            .visualization(config.visualization)
            .frames_per_second(config.frames_per_second)
    }
}

impl<R: RandomSource> EngineBuilder<R> {
    /// Use a `SimRng` seeded with `seed`.
    pub fn seed(self, seed: u64) -> EngineBuilder<SimRng> {
        self.rng(SimRng::new(seed))
    }

    /// Use any [`RandomSource`] for placement and the randomization phase.
    pub fn rng<R2: RandomSource>(self, rng: R2) -> EngineBuilder<R2> {
        EngineBuilder {
            params:            self.params,
            rng,
            visualization:     self.visualization,
            frames_per_second: self.frames_per_second,
            positions:         self.positions,
        }
    }

    /// Forward a lane snapshot to the frame sink after every step.
    ///
    /// Only [`Engine::run_with`] honors this flag; [`Engine::run`] has no
    /// sink and never renders.
    pub fn visualization(mut self, enabled: bool) -> Self {
        self.visualization = enabled;
        self
    }

    pub fn frames_per_second(mut self, fps: u32) -> Self {
        self.frames_per_second = fps;
        self
    }

    /// Place vehicles at these cells instead of sampling.
    ///
    /// Must hold exactly `round(L·ρ)` distinct positions.
    pub fn initial_positions(mut self, positions: Vec<usize>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate the parameters, place the vehicles, and return a ready engine.
    pub fn build(mut self) -> SimResult<Engine<R>> {
        let expected = self.params.validate()?;

        let lane = match self.positions {
            Some(p) => {
                if p.len() != expected {
                    return Err(SimError::VehicleCountMismatch { expected, got: p.len() });
                }
                Lane::from_positions(self.params.lane_length, &p)?
            }
            None => Lane::random(&self.params, &mut self.rng)?,
        };

        Ok(Engine {
            params:            self.params,
            lane,
            rng:               self.rng,
            history:           Vec::new(),
            state:             EngineState::Initialized,
            step:              Step::ZERO,
            visualization:     self.visualization,
            frames_per_second: self.frames_per_second,
        })
    }
}
