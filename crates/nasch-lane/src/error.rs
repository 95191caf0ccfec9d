use nasch_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LaneError {
    #[error("position {position} is outside a lane of {lane_length} cells")]
    PositionOutOfRange { position: usize, lane_length: usize },

    #[error("two vehicles placed at position {0}")]
    DuplicatePosition(usize),

    #[error("a lane needs at least one vehicle")]
    NoVehicles,

    #[error("vehicle rank {rank} has no representable id")]
    IdOverflow { rank: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type LaneResult<T> = Result<T, LaneError>;
