//! `nasch-output` — file output for the nasch traffic automaton.
//!
//! | Item                      | Files created                                   |
//! |---------------------------|-------------------------------------------------|
//! | [`CsvFrameSink`]          | `frames.csv`, `spacetime.txt`                   |
//! | [`write_velocity_series`] | one CSV, `step,average_velocity`                |
//! | [`write_sweep`]           | one CSV, `slowing_probability,density,mean_velocity` |
//!
//! `CsvFrameSink` implements `nasch_sim::FrameSink`, so the engine drives it
//! directly:
//!
//! ```rust,ignore
//! use nasch_output::CsvFrameSink;
//!
//! let mut sink = CsvFrameSink::new(Path::new("./output"))?;
//! let report = engine.run_with(100, &mut sink, &mut NoopObserver);
//! if let Some(e) = report.render_error { eprintln!("render error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod frames;
pub mod row;


pub use csv::{write_sweep, write_velocity_series};
pub use error::{OutputError, OutputResult};
pub use frames::{Animation, CsvFrameSink, FrameHandle};
pub use row::{FrameCellRow, VelocityRow};
