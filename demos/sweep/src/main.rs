//! sweep — average velocity against car density.
//!
//! For p ∈ {0.2, 0.5, 0.7} and 17 densities from 0.1 to 0.9, runs 100 steps
//! on a 100-cell ring (v_max = 5) and reports the time-averaged velocity of
//! each run.  Results go to `output/sweep/sweep.csv`; a text chart of each
//! curve is printed.
//!
//! Sweep points run in parallel on Rayon's pool; results are identical to a
//! sequential sweep.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use nasch_output::write_sweep;
use nasch_sim::{SweepConfig, SweepPoint, sweep};

const OUTPUT_DIR: &str = "output/sweep";
const BAR_WIDTH:  f64  = 50.0;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// One text bar per density, scaled so `v_max` fills the bar.
fn print_curve(p: f64, points: &[&SweepPoint], max_velocity: u32) {
    println!("p = {p}");
    for pt in points {
        let len = (pt.mean_velocity / max_velocity as f64 * BAR_WIDTH).round() as usize;
        println!("  ρ = {:.2}  {:>6.3}  {}", pt.density, pt.mean_velocity, "█".repeat(len));
    }
    println!();
}

fn main() -> Result<()> {
    init_tracing();
    let config = SweepConfig::default();

    println!("=== sweep — average velocity vs. car density ===");
    println!(
        "L = {}  |  v_max = {}  |  steps = {}  |  p ∈ {:?}  |  {} densities",
        config.lane_length,
        config.max_velocity,
        config.steps,
        config.slowing_probabilities,
        config.densities.len(),
    );
    println!();

    let t0 = Instant::now();
    let points = sweep(&config)?;
    println!("{} runs in {:.3} s", points.len(), t0.elapsed().as_secs_f64());
    println!();

    for &p in &config.slowing_probabilities {
        let curve: Vec<&SweepPoint> = points
            .iter()
            .filter(|pt| pt.slowing_probability == p)
            .collect();
        print_curve(p, &curve, config.max_velocity);
    }

    let out = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(out)?;
    write_sweep(&out.join("sweep.csv"), &points)?;
    println!("wrote {}", out.join("sweep.csv").display());

    Ok(())
}
