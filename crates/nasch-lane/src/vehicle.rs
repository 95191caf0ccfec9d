//! A single vehicle.

use nasch_core::VehicleId;

/// One vehicle on the lane.
///
/// Vehicles are created once during placement and only ever move between
/// cells; identity and hue never change.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id: VehicleId,

    /// Cells advanced per step.  Always `<= max_velocity`.
    pub velocity: u32,

    /// Display hue in `[0, 1)`.  Cosmetic only; the update rules ignore it.
    pub hue: f64,
}

impl Vehicle {
    /// A stationary vehicle.
    pub fn new(id: VehicleId, hue: f64) -> Self {
        Self { id, velocity: 0, hue }
    }
}
