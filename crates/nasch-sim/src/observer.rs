//! Step observer trait for progress reporting and early termination.

use nasch_core::Step;

/// Callbacks invoked by [`Engine::run_with`][crate::Engine::run_with] at
/// step boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: stop once traffic is free-flowing
///
/// ```rust,ignore
/// struct UntilFree { v_max: f64 }
///
/// impl StepObserver for UntilFree {
///     fn should_stop(&mut self, _step: Step, avg: f64) -> bool {
///         avg >= self.v_max
///     }
/// }
/// ```
pub trait StepObserver {
    /// Called once before the first step with the initial average velocity.
    fn on_run_start(&mut self, _step: Step, _average_velocity: f64) {}

    /// Called after every completed step (and after its frame is rendered).
    fn on_step_end(&mut self, _step: Step, _average_velocity: f64) {}

    /// Checked at the end of every step; returning `true` ends the run early.
    /// Frames rendered so far are still assembled.
    fn should_stop(&mut self, _step: Step, _average_velocity: f64) -> bool {
        false
    }

    /// Called once after the last step.
    fn on_run_end(&mut self, _final_step: Step, _steps_completed: u64) {}
}

/// A [`StepObserver`] that does nothing.
pub struct NoopObserver;

impl StepObserver for NoopObserver {}
