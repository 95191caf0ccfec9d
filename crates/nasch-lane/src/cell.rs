use crate::Vehicle;

/// One lane cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Vehicle),
}

impl Cell {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn vehicle(&self) -> Option<&Vehicle> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(v) => Some(v),
        }
    }

    #[inline]
    pub fn vehicle_mut(&mut self) -> Option<&mut Vehicle> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(v) => Some(v),
        }
    }
}
