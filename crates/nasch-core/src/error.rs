//! Configuration errors.
//!
//! Every constraint on [`ModelParams`](crate::ModelParams) is checked eagerly
//! by [`ModelParams::validate`](crate::ModelParams::validate); a failed check
//! means no lane and no engine are ever built.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("lane length must be positive")]
    EmptyLane,

    #[error("car density {0} is outside (0, 1]")]
    Density(f64),

    #[error("slowing probability {0} is outside [0, 1]")]
    SlowingProbability(f64),

    #[error("{count} vehicles do not fit on a lane of {lane_length} cells")]
    TooManyVehicles { count: usize, lane_length: usize },

    #[error("density {density} on a lane of {lane_length} cells places no vehicles")]
    NoVehicles { lane_length: usize, density: f64 },
}

/// Shorthand result type for parameter validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
