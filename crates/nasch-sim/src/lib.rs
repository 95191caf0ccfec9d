//! `nasch-sim` — the Nagel-Schreckenberg update engine and run driver.
//!
//! # Four-phase step
//!
//! ```text
//! for step in 1..=num_steps:
//!   ① Accelerate — v ← min(v + 1, v_max)
//!   ② Brake      — v ← min(v, gap to the vehicle ahead)
//!   ③ Randomize  — with probability p, v ← max(v − 1, 0)
//!   ④ Move       — every vehicle advances v cells at once, into a fresh lane
//!   record the average velocity
//!   if visualization is on: sink.render_frame(lane, step, params)
//! finally, if visualization is on: sink.assemble(frames, fps)
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs sweep points on Rayon's thread pool.              |
//!
//! # Quick-start
//!
//! ```rust
//! use nasch_core::ModelParams;
//! use nasch_sim::EngineBuilder;
//!
//! let params = ModelParams::new(10, 0.1, 2, 0.0);
//! let mut engine = EngineBuilder::new(params).seed(42).build()?;
//! assert_eq!(engine.run(4), vec![0.0, 1.0, 2.0, 2.0, 2.0]);
//! # Ok::<(), nasch_sim::SimError>(())
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod sink;
pub mod sweep;


pub use builder::EngineBuilder;
pub use engine::{Engine, EngineState, RunReport};
pub use error::{RenderError, SimError, SimResult, UnknownFrame};
pub use observer::{NoopObserver, StepObserver};
pub use sink::{FrameSink, NoopSink, SpaceTimeSink};
pub use sweep::{SweepConfig, SweepPoint, linspace, sweep, time_averaged_velocity};
