//! The visualization boundary.
//!
//! The engine never knows how frames are drawn or stored.  It hands each
//! post-step lane to a [`FrameSink`] as a shared borrow (the sink cannot keep
//! it past the call) and, at the end of a run, asks the sink to assemble the
//! frames it returned into one artifact.

use std::convert::Infallible;

use nasch_core::{ModelParams, Step};
use nasch_lane::Lane;

use crate::error::UnknownFrame;

/// Renders lane snapshots and assembles them into an animation.
pub trait FrameSink {
    /// Handle to one rendered frame, returned to the sink at assembly.
    type Frame;

    /// The assembled artifact.  Opaque to the engine.
    type Animation;

    type Error: std::error::Error + Send + Sync + 'static;

    fn render_frame(
        &mut self,
        lane:   &Lane,
        step:   Step,
        params: &ModelParams,
    ) -> Result<Self::Frame, Self::Error>;

    fn assemble(
        &mut self,
        frames:            &[Self::Frame],
        frames_per_second: u32,
    ) -> Result<Self::Animation, Self::Error>;
}

// ── NoopSink ──────────────────────────────────────────────────────────────────

/// A [`FrameSink`] that renders nothing.  The animation is the frame count.
pub struct NoopSink;

impl FrameSink for NoopSink {
    type Frame = Step;
    type Animation = usize;
    type Error = Infallible;

    fn render_frame(&mut self, _lane: &Lane, step: Step, _params: &ModelParams) -> Result<Step, Infallible> {
        Ok(step)
    }

    fn assemble(&mut self, frames: &[Step], _fps: u32) -> Result<usize, Infallible> {
        Ok(frames.len())
    }
}

// ── SpaceTimeSink ─────────────────────────────────────────────────────────────

/// In-memory sink that keeps one [`Lane::render_row`] per frame.
///
/// The assembled animation is the space-time diagram: rows in frame order,
/// time running down the page.  Assembling a handle this sink did not hand
/// out fails with [`UnknownFrame`].
#[derive(Default)]
pub struct SpaceTimeSink {
    rows: Vec<String>,
}

impl SpaceTimeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows rendered so far, in render order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl FrameSink for SpaceTimeSink {
    type Frame = usize;
    type Animation = Vec<String>;
    type Error = UnknownFrame;

    fn render_frame(&mut self, lane: &Lane, _step: Step, _params: &ModelParams) -> Result<usize, UnknownFrame> {
        self.rows.push(lane.render_row());
        Ok(self.rows.len() - 1)
    }

    fn assemble(&mut self, frames: &[usize], _fps: u32) -> Result<Vec<String>, UnknownFrame> {
        frames
            .iter()
            .map(|&i| self.rows.get(i).cloned().ok_or(UnknownFrame(i)))
            .collect()
    }
}
