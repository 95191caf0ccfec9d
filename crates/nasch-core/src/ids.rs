//! Strongly typed vehicle identifier.
//!
//! Identities are assigned `1..=N` in ascending order of initial cell
//! position and never change for the lifetime of a run.

use std::fmt;

/// Identity of one vehicle on the lane.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u32);

impl VehicleId {
    /// Zero-based rank of this vehicle in initial placement order.
    #[inline(always)]
    pub fn rank(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleId({})", self.0)
    }
}

impl TryFrom<usize> for VehicleId {
    type Error = std::num::TryFromIntError;

    /// Build the id for the vehicle of zero-based placement `rank`.
    ///
    /// Fails when `rank + 1` does not fit in a `u32`.
    fn try_from(rank: usize) -> Result<VehicleId, Self::Error> {
        let rank = u32::try_from(rank)?;
        u32::try_from(u64::from(rank) + 1).map(VehicleId)
    }
}
