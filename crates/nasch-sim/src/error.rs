use nasch_core::{ConfigError, Step};
use nasch_lane::LaneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("lane setup failed: {0}")]
    Lane(#[from] LaneError),

    #[error("initial positions hold {got} vehicles but the parameters derive {expected}")]
    VehicleCountMismatch { expected: usize, got: usize },

    #[error("sweep configuration error: {0}")]
    Sweep(String),
}

pub type SimResult<T> = Result<T, SimError>;

/// A frame handle that the assembling sink never returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("frame {0} was not rendered by this sink")]
pub struct UnknownFrame(pub usize);

/// A failure inside a [`FrameSink`](crate::FrameSink).
///
/// Never aborts a run: the driver records it in
/// [`RunReport::render_error`](crate::RunReport::render_error) and keeps
/// stepping.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("rendering frame {step} failed: {source}")]
    Frame {
        step:   Step,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("assembling {frames} frames failed: {source}")]
    Assemble {
        frames: usize,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
