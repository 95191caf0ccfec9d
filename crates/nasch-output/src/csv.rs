//! CSV writers for metric series and sweep results.

use std::path::Path;

use csv::Writer;
use nasch_sim::SweepPoint;

use crate::{OutputResult, VelocityRow};

/// Write a run's metric series, one row per recorded step.
pub fn write_velocity_series(path: &Path, series: &[f64]) -> OutputResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["step", "average_velocity"])?;
    for row in series.iter().enumerate().map(|(i, &v)| VelocityRow {
        step:             i as u64,
        average_velocity: v,
    }) {
        w.write_record(&[row.step.to_string(), row.average_velocity.to_string()])?;
    }
    w.flush()?;
    Ok(())
}

/// Write sweep results in the order given.
pub fn write_sweep(path: &Path, points: &[SweepPoint]) -> OutputResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["slowing_probability", "density", "mean_velocity"])?;
    for pt in points {
        w.write_record(&[
            pt.slowing_probability.to_string(),
            pt.density.to_string(),
            pt.mean_velocity.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
