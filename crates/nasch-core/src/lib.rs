//! `nasch-core` — foundational types for the `nasch` traffic automaton.
//!
//! This crate is a dependency of every other `nasch-*` crate.  It has no
//! `nasch-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `VehicleId`                                           |
//! | [`step`]   | `Step` counter                                        |
//! | [`params`] | `ModelParams`, `SimConfig`                            |
//! | [`rng`]    | `RandomSource` trait, `SimRng`                        |
//! | [`error`]  | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult};
pub use ids::VehicleId;
pub use params::{ModelParams, SimConfig};
pub use rng::{RandomSource, SimRng};
pub use step::Step;
