//! ring — one animated run on a circular lane.
//!
//! Runs 100 steps of a 100-cell ring at 60% occupancy (v_max = 5, p = 0.2),
//! writes every frame to `output/ring/frames.csv`, assembles the space-time
//! diagram in `output/ring/spacetime.txt`, and the metric series in
//! `output/ring/velocity.csv`.
//!
//! Pass a JSON file to override any part of the configuration:
//!
//! ```text
//! cargo run -p ring -- config.json
//! { "params": { "lane_length": 200, "density": 0.3, "max_velocity": 5,
//!               "slowing_probability": 0.1 }, "steps": 300 }
//! ```
//!
//! Set `RUST_LOG=debug` to log every step.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use nasch_core::{SimConfig, Step};
use nasch_output::{CsvFrameSink, write_velocity_series};
use nasch_sim::{EngineBuilder, StepObserver};
use tracing::info;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:     &str = "output/ring";
const PROGRESS_EVERY: u64  = 10;
const PREVIEW_ROWS:   usize = 20;

// ── Progress observer ─────────────────────────────────────────────────────────

struct Progress {
    every: u64,
}

impl StepObserver for Progress {
    fn on_step_end(&mut self, step: Step, average_velocity: f64) {
        if step.0 % self.every == 0 {
            info!(step = step.0, average_velocity, "progress");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config() -> Result<SimConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))
        }
        None => Ok(SimConfig { visualization: true, ..SimConfig::default() }),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let config = load_config()?;
    let p = &config.params;

    println!("=== ring — Nagel-Schreckenberg single lane ===");
    println!(
        "L = {}  |  density = {}  |  v_max = {}  |  p = {}  |  steps = {}  |  seed = {}",
        p.lane_length, p.density, p.max_velocity, p.slowing_probability, config.steps, config.seed,
    );
    println!();

    let mut engine = EngineBuilder::from_config(&config).build()?;
    let out = Path::new(OUTPUT_DIR);
    let mut sink = CsvFrameSink::new(out)?;

    let t0 = Instant::now();
    let report = engine.run_with(config.steps, &mut sink, &mut Progress { every: PROGRESS_EVERY });
    let elapsed = t0.elapsed();

    // The series is written even if rendering failed.
    write_velocity_series(&out.join("velocity.csv"), &report.average_velocities)?;

    if let Some(e) = &report.render_error {
        eprintln!("render error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  vehicles            : {}", engine.lane().vehicle_count());
    println!("  steps               : {}", report.steps_completed);
    println!(
        "  final avg velocity  : {:.3}",
        report.average_velocities.last().copied().unwrap_or_default(),
    );
    println!(
        "  time-averaged       : {:.3}",
        nasch_sim::time_averaged_velocity(&report.average_velocities),
    );

    if let Some(animation) = &report.animation {
        println!(
            "  spacetime.txt       : {} frames @ {} fps → {}",
            animation.frames,
            animation.frames_per_second,
            animation.path.display(),
        );
        println!();
        let text = std::fs::read_to_string(&animation.path)?;
        for line in text.lines().skip(1).take(PREVIEW_ROWS) {
            println!("{line}");
        }
    }

    Ok(())
}
