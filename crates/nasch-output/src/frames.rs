//! File-backed [`FrameSink`].
//!
//! Every rendered frame appends its occupied cells to `frames.csv` and keeps
//! a one-line text rendering of the lane.  Assembly writes those lines, in
//! handle order, to `spacetime.txt`: the classic Nagel-Schreckenberg
//! space-time diagram, one row per frame, jams showing up as diagonal bands
//! drifting backwards.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::Writer;
use nasch_core::{ModelParams, Step};
use nasch_lane::Lane;
use nasch_sim::FrameSink;
use tracing::debug;

use crate::{FrameCellRow, OutputError, OutputResult};

pub const FRAMES_FILE: &str = "frames.csv";
pub const SPACETIME_FILE: &str = "spacetime.txt";

/// Returned by [`CsvFrameSink::render_frame`]; hand back to `assemble`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle {
    pub step: Step,
    index:    usize,
}

/// The assembled space-time diagram on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    pub path:              PathBuf,
    pub frames:            usize,
    pub frames_per_second: u32,
}

/// Writes frames under one output directory.
///
/// Owns its file handles; they are flushed by [`assemble`] and
/// [`finish`], and again when the sink is dropped.
///
/// [`assemble`]: FrameSink::assemble
/// [`finish`]: CsvFrameSink::finish
pub struct CsvFrameSink {
    dir:      PathBuf,
    frames:   Writer<File>,
    rows:     Vec<String>,
    params:   Option<ModelParams>,
    finished: bool,
}

impl CsvFrameSink {
    /// Create `dir` if needed, replace any previous run's output there, and
    /// write the `frames.csv` header.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        let stale = dir.join(SPACETIME_FILE);
        if stale.exists() {
            fs::remove_file(&stale)?;
        }

        let mut frames = Writer::from_path(dir.join(FRAMES_FILE))?;
        frames.write_record(["step", "cell", "vehicle_id", "velocity", "hue"])?;

        Ok(Self {
            dir: dir.to_path_buf(),
            frames,
            rows: Vec::new(),
            params: None,
            finished: false,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> usize {
        self.rows.len()
    }

    /// Flush `frames.csv`.
    ///
    /// Idempotent; safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        Ok(())
    }

    /// Encode one frame's rows in memory and append them to `frames.csv` in a
    /// single write, so a frame that fails to encode leaves no rows behind.
    fn write_cells(&mut self, lane: &Lane, step: Step) -> OutputResult<()> {
        let mut frame = Writer::from_writer(Vec::new());
        for (cell, vehicle) in lane.occupied() {
            let row = FrameCellRow {
                step:       step.0,
                cell:       cell as u64,
                vehicle_id: vehicle.id.0,
                velocity:   vehicle.velocity,
                hue:        vehicle.hue,
            };
            frame.write_record(&[
                row.step.to_string(),
                row.cell.to_string(),
                row.vehicle_id.to_string(),
                row.velocity.to_string(),
                row.hue.to_string(),
            ])?;
        }
        let bytes = frame.into_inner().map_err(|e| e.into_error())?;

        self.frames.flush()?;
        let mut file: &File = self.frames.get_ref();
        file.write_all(&bytes)?;
        Ok(())
    }

    fn header(&self, fps: u32) -> String {
        match &self.params {
            Some(p) => format!(
                "# nasch space-time diagram: L={}, rho={}, vmax={}, p={}, fps={fps}",
                p.lane_length, p.density, p.max_velocity, p.slowing_probability,
            ),
            None => format!("# nasch space-time diagram: fps={fps}"),
        }
    }
}

impl FrameSink for CsvFrameSink {
    type Frame = FrameHandle;
    type Animation = Animation;
    type Error = OutputError;

    /// Append the lane's occupied cells to `frames.csv` and keep its text row.
    ///
    /// Rows reach the file once per frame.  An I/O failure in that write can
    /// still truncate the file mid-frame; the frame then gets no handle.
    fn render_frame(
        &mut self,
        lane:   &Lane,
        step:   Step,
        params: &ModelParams,
    ) -> OutputResult<FrameHandle> {
        self.write_cells(lane, step)?;
        self.params = Some(*params);
        self.rows.push(lane.render_row());
        self.finished = false;
        Ok(FrameHandle { step, index: self.rows.len() - 1 })
    }

    fn assemble(&mut self, frames: &[FrameHandle], fps: u32) -> OutputResult<Animation> {
        self.finish()?;

        let path = self.dir.join(SPACETIME_FILE);
        let mut out = BufWriter::new(File::create(&path)?);
        writeln!(out, "{}", self.header(fps))?;
        for frame in frames {
            let row = self
                .rows
                .get(frame.index)
                .ok_or(OutputError::UnknownFrame(frame.step))?;
            writeln!(out, "{row}")?;
        }
        out.flush()?;

        debug!(frames = frames.len(), path = %path.display(), "assembled space-time diagram");
        Ok(Animation { path, frames: frames.len(), frames_per_second: fps })
    }
}

impl Drop for CsvFrameSink {
    fn drop(&mut self) {
        let _ = self.finish();
    }
}
