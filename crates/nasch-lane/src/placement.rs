//! Initial placement of vehicles on an empty lane.
//!
//! Chosen cell indices are sorted ascending and vehicles get identities
//! `1..=N` in that order, with hue `(id − 1) / N`.  The ordering is not
//! required by the update rules, but it makes a run a pure function of the
//! random source, which replay and the determinism tests rely on.

use nasch_core::{ModelParams, RandomSource, VehicleId};
use tracing::debug;

use crate::{Cell, Lane, LaneError, LaneResult, Vehicle};

impl Lane {
    /// Place `round(L·ρ)` vehicles on distinct cells drawn from `rng`.
    ///
    /// Validates `params` first; an invalid configuration draws nothing.
    pub fn random<R>(params: &ModelParams, rng: &mut R) -> LaneResult<Lane>
    where
        R: RandomSource + ?Sized,
    {
        let count = params.validate()?;
        let positions = rng.sample_distinct(params.lane_length, count);
        let lane = Lane::from_positions(params.lane_length, &positions)?;
        debug!(
            lane_length = params.lane_length,
            vehicles = count,
            "placed vehicles"
        );
        Ok(lane)
    }

    /// Build a lane with stationary vehicles at the given cell indices.
    ///
    /// `positions` may be in any order; duplicates and out-of-range indices
    /// are rejected.
    pub fn from_positions(lane_length: usize, positions: &[usize]) -> LaneResult<Lane> {
        if lane_length == 0 {
            return Err(nasch_core::ConfigError::EmptyLane.into());
        }
        if positions.is_empty() {
            return Err(LaneError::NoVehicles);
        }

        let mut sorted = positions.to_vec();
        sorted.sort_unstable();

        let count = sorted.len();
        let mut cells = vec![Cell::Empty; lane_length];
        for (rank, &position) in sorted.iter().enumerate() {
            let Some(cell) = cells.get_mut(position) else {
                return Err(LaneError::PositionOutOfRange { position, lane_length });
            };
            if !cell.is_empty() {
                return Err(LaneError::DuplicatePosition(position));
            }
            let id = vehicle_id(rank)?;
            *cell = Cell::Occupied(Vehicle::new(id, id.rank() as f64 / count as f64));
        }

        Ok(Lane::from_cells(cells, count))
    }
}

/// The id of the vehicle at zero-based placement `rank`.
pub(crate) fn vehicle_id(rank: usize) -> LaneResult<VehicleId> {
    VehicleId::try_from(rank).map_err(|_| LaneError::IdOverflow { rank })
}
