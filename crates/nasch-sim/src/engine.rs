//! The `Engine` struct and its step loop.

use nasch_core::{ModelParams, RandomSource, SimRng, Step};
use nasch_lane::Lane;
use tracing::{debug, info, warn};

use crate::{FrameSink, NoopObserver, NoopSink, RenderError, StepObserver};

// ── EngineState ───────────────────────────────────────────────────────────────

/// Lifecycle of an [`Engine`].
///
/// A configuration error means no engine exists at all, so there is no error
/// state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EngineState {
    /// Valid lane, ready to step.  Also the state a standalone
    /// [`Engine::step`] returns to.
    Initialized,
    /// Inside the four phases of one step.
    Stepping,
    /// A run's step budget was exhausted (or the observer stopped it).  The
    /// engine can still be stepped or run again.
    Completed,
}

// ── RunReport ─────────────────────────────────────────────────────────────────

/// Everything a driven run produced.
///
/// `average_velocities` is authoritative whether or not rendering succeeded.
#[derive(Debug)]
pub struct RunReport<A> {
    /// Entry `i` is the average velocity after `i` completed steps of this run.
    pub average_velocities: Vec<f64>,

    /// Steps actually executed; less than requested if the observer stopped
    /// the run.
    pub steps_completed: u64,

    /// The assembled animation, if visualization was on and every frame
    /// rendered.
    pub animation: Option<A>,

    /// The first rendering failure, if any.
    pub render_error: Option<RenderError>,
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Owns a lane and advances it one Nagel-Schreckenberg step at a time.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine<R: RandomSource = SimRng> {
    pub(crate) params:            ModelParams,
    pub(crate) lane:              Lane,
    pub(crate) rng:               R,
    pub(crate) history:           Vec<f64>,
    pub(crate) state:             EngineState,
    pub(crate) step:              Step,
    pub(crate) visualization:     bool,
    pub(crate) frames_per_second: u32,
}

impl<R: RandomSource> Engine<R> {
    // ── Read access ───────────────────────────────────────────────────────

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// The current lane.  Borrowing it blocks stepping, so callers always see
    /// a completed state.
    pub fn lane(&self) -> &Lane {
        &self.lane
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Total steps executed since construction.
    pub fn current_step(&self) -> Step {
        self.step
    }

    /// Metric series recorded so far.  Empty until the first step or run.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn average_velocity(&self) -> f64 {
        self.lane.average_velocity()
    }

    pub fn visualization(&self) -> bool {
        self.visualization
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Apply the four phases once, record and return the new average velocity.
    pub fn step(&mut self) -> f64 {
        self.state = EngineState::Stepping;

        self.lane.accelerate(self.params.max_velocity);
        self.lane.brake();
        self.lane.randomize(self.params.slowing_probability, &mut self.rng);
        self.lane.advance();

        self.step = self.step.next();
        let avg = self.lane.average_velocity();
        self.history.push(avg);
        self.state = EngineState::Initialized;

        debug!(step = self.step.0, average_velocity = avg, "step complete");
        avg
    }

    /// Run `num_steps` steps with no rendering and return the metric series
    /// (`num_steps + 1` entries, the first for the initial state).
    ///
    /// The visualization flag is ignored here and left unchanged; use
    /// [`run_with`](Self::run_with) to render frames.
    pub fn run(&mut self, num_steps: u64) -> Vec<f64> {
        let visualization = self.visualization;
        self.visualization = false;
        let report = self.run_with(num_steps, &mut NoopSink, &mut NoopObserver);
        self.visualization = visualization;
        report.average_velocities
    }

    /// Run up to `num_steps` steps, forwarding frames to `sink` when
    /// visualization is enabled and reporting progress to `observer`.
    ///
    /// Restarts the metric series from the current lane state.  A frame that
    /// fails to render turns rendering off for the rest of the run and skips
    /// assembly; stepping carries on either way.
    pub fn run_with<S, O>(
        &mut self,
        num_steps: u64,
        sink:      &mut S,
        observer:  &mut O,
    ) -> RunReport<S::Animation>
    where
        S: FrameSink,
        O: StepObserver,
    {
        let initial = self.lane.average_velocity();
        self.history.clear();
        self.history.push(initial);

        info!(
            steps = num_steps,
            lane_length = self.lane.len(),
            vehicles = self.lane.vehicle_count(),
            "run started"
        );
        observer.on_run_start(self.step, initial);

        let mut rendering = self.visualization;
        let mut frames = Vec::new();
        let mut render_error = None;
        let mut completed = 0;

        while completed < num_steps {
            let avg = self.step();
            completed += 1;
            let now = self.step;

            if rendering {
                match sink.render_frame(&self.lane, now, &self.params) {
                    Ok(frame) => frames.push(frame),
                    Err(e) => {
                        warn!(step = now.0, error = %e, "frame render failed, rendering disabled");
                        render_error = Some(RenderError::Frame { step: now, source: Box::new(e) });
                        rendering = false;
                    }
                }
            }

            observer.on_step_end(now, avg);
            if observer.should_stop(now, avg) {
                info!(step = now.0, "run stopped by observer");
                break;
            }
        }

        let animation = if rendering {
            match sink.assemble(&frames, self.frames_per_second) {
                Ok(animation) => Some(animation),
                Err(e) => {
                    warn!(frames = frames.len(), error = %e, "animation assembly failed");
                    render_error = Some(RenderError::Assemble {
                        frames: frames.len(),
                        source: Box::new(e),
                    });
                    None
                }
            }
        } else {
            None
        };

        self.state = EngineState::Completed;
        observer.on_run_end(self.step, completed);
        info!(
            steps_completed = completed,
            final_average_velocity = self.lane.average_velocity(),
            "run finished"
        );

        RunReport {
            average_velocities: self.history.clone(),
            steps_completed: completed,
            animation,
            render_error,
        }
    }
}
