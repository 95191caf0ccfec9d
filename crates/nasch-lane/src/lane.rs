//! The circular lane and the four update phases.

use nasch_core::{RandomSource, VehicleId};

use crate::{Cell, Vehicle};

/// A ring of `L` cells holding a fixed set of `N` vehicles.
///
/// Cell `L − 1` is followed by cell `0`.  The vehicle count never changes
/// after placement; every phase preserves it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lane {
    cells:         Vec<Cell>,
    vehicle_count: usize,
}

impl Lane {
    pub(crate) fn from_cells(cells: Vec<Cell>, vehicle_count: usize) -> Self {
        Self { cells, vehicle_count }
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Number of cells (L).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` only for a lane with no cells, which placement never builds.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of vehicles (N).
    #[inline]
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Occupied cells as `(position, vehicle)`, in ascending position order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Vehicle)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.vehicle().map(|v| (i, v)))
    }

    /// Positions of all vehicles, ascending.
    pub fn positions(&self) -> Vec<usize> {
        self.occupied().map(|(i, _)| i).collect()
    }

    /// Per-cell velocity, `None` for empty cells.
    pub fn velocities(&self) -> Vec<Option<u32>> {
        self.cells.iter().map(|c| c.vehicle().map(|v| v.velocity)).collect()
    }

    /// Vehicle identities in ascending position order.
    ///
    /// Read as a ring, this sequence is invariant under [`advance`]: vehicles
    /// never overtake.
    ///
    /// [`advance`]: Lane::advance
    pub fn vehicle_order(&self) -> Vec<VehicleId> {
        self.occupied().map(|(_, v)| v.id).collect()
    }

    pub fn total_velocity(&self) -> u64 {
        self.occupied().map(|(_, v)| u64::from(v.velocity)).sum()
    }

    /// Mean velocity over all vehicles.
    pub fn average_velocity(&self) -> f64 {
        self.total_velocity() as f64 / self.vehicle_count as f64
    }

    /// Empty cells between each vehicle and the next one ahead, in ascending
    /// position order.
    ///
    /// Computed from the sorted position index in O(N).  A lone vehicle sees
    /// `L − 1` empty cells: the whole ring except itself.
    pub fn gaps(&self) -> Vec<usize> {
        let len = self.cells.len();
        let positions = self.positions();
        let n = positions.len();
        positions
            .iter()
            .enumerate()
            .map(|(k, &pos)| {
                let next = positions[(k + 1) % n];
                (next + len - pos - 1) % len
            })
            .collect()
    }

    /// One character per cell: `.` for empty, the velocity digit otherwise
    /// (`+` above 9).  One row per step stacks into a space-time diagram.
    pub fn render_row(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Empty => '.',
                Cell::Occupied(v) => char::from_digit(v.velocity, 10).unwrap_or('+'),
            })
            .collect()
    }

    // ── Update phases ─────────────────────────────────────────────────────

    fn vehicles_mut(&mut self) -> impl Iterator<Item = &mut Vehicle> + '_ {
        self.cells.iter_mut().filter_map(Cell::vehicle_mut)
    }

    /// Phase 1: `v ← min(v + 1, max_velocity)` for every vehicle.
    pub fn accelerate(&mut self, max_velocity: u32) {
        for vehicle in self.vehicles_mut() {
            vehicle.velocity = vehicle.velocity.saturating_add(1).min(max_velocity);
        }
    }

    /// Phase 2: `v ← min(v, gap)` for every vehicle.
    ///
    /// Gaps depend on positions only, which this phase does not touch.
    pub fn brake(&mut self) {
        let gaps = self.gaps();
        for (vehicle, gap) in self.vehicles_mut().zip(gaps) {
            if vehicle.velocity as usize > gap {
                vehicle.velocity = gap as u32;
            }
        }
    }

    /// Phase 3: with probability `p`, `v ← max(v − 1, 0)`.
    ///
    /// One independent trial per vehicle, drawn in ascending position order.
    pub fn randomize<R>(&mut self, p: f64, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        for vehicle in self.vehicles_mut() {
            if rng.bernoulli(p) {
                vehicle.velocity = vehicle.velocity.saturating_sub(1);
            }
        }
    }

    /// Phase 4: move every vehicle `v` cells ahead, all at once.
    ///
    /// Destinations are computed from the pre-motion cells and written into a
    /// fresh cell array.  After [`brake`](Lane::brake) every `v <= gap`, so
    /// destinations are distinct.
    pub fn advance(&mut self) {
        let len = self.cells.len();
        let mut next = vec![Cell::Empty; len];
        for (pos, cell) in std::mem::take(&mut self.cells).into_iter().enumerate() {
            if let Cell::Occupied(vehicle) = cell {
                let dest = (pos + vehicle.velocity as usize) % len;
                debug_assert!(
                    next[dest].is_empty(),
                    "collision at cell {dest}: {} moved from {pos}",
                    vehicle.id,
                );
                next[dest] = Cell::Occupied(vehicle);
            }
        }
        self.cells = next;
    }
}
