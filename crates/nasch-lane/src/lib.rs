//! `nasch-lane` — the circular lane and the vehicles on it.
//!
//! A [`Lane`] is a fixed-length ring of [`Cell`]s.  Each cell is either
//! empty or holds exactly one [`Vehicle`] by value, so two vehicles sharing a
//! cell cannot be represented.
//!
//! The four Nagel-Schreckenberg phases are methods on `Lane`
//! ([`accelerate`](Lane::accelerate), [`brake`](Lane::brake),
//! [`randomize`](Lane::randomize), [`advance`](Lane::advance)).  They must be
//! applied in that order; `nasch-sim` composes them into one step.
//!
//! ```rust
//! use nasch_core::{ModelParams, SimRng};
//! use nasch_lane::Lane;
//!
//! let params = ModelParams::new(20, 0.25, 3, 0.0);
//! let lane = Lane::random(&params, &mut SimRng::new(7)).unwrap();
//! assert_eq!(lane.len(), 20);
//! assert_eq!(lane.vehicle_count(), 5);
//! assert_eq!(lane.average_velocity(), 0.0);
//! ```

pub mod cell;
pub mod error;
pub mod lane;
pub mod placement;
pub mod vehicle;


pub use cell::Cell;
pub use error::{LaneError, LaneResult};
pub use lane::Lane;
pub use vehicle::Vehicle;
