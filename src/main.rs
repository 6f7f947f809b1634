use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use orbit_sim::io::json::RunSummary;
use orbit_sim::io::{csv, json, table};
use orbit_sim::scenario::{presets, ScenarioConfig, SimParams};
use orbit_sim::sim;

#[derive(Parser, Debug)]
#[command(name = "orbit-sim")]
#[command(about = "2D trajectory under central gravity with linear propulsion/drag")]
#[command(version)]
struct Args {
    /// YAML scenario file (takes precedence over --preset)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Built-in scenario: unit-circle, low-earth-orbit, decaying-orbit, escape-burn
    #[arg(short, long, default_value = "unit-circle")]
    preset: String,

    /// Override the time step. Without --steps the simulated time is kept
    /// and the step count is recomputed
    #[arg(long)]
    dt: Option<f64>,

    /// Override the step count
    #[arg(long)]
    steps: Option<usize>,

    /// Write every sample to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the run summary to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Rows in the printed trajectory table
    #[arg(long, default_value_t = 20)]
    rows: usize,
}

fn load_params(args: &Args) -> Result<(String, SimParams)> {
    let (name, mut params) = match &args.scenario {
        Some(path) => {
            let cfg = ScenarioConfig::load(path)
                .with_context(|| format!("loading scenario {}", path.display()))?;
            let name = cfg.name.clone().unwrap_or_else(|| path.display().to_string());
            (name, cfg.to_params()?)
        }
        None => match presets::by_name(&args.preset) {
            Some(p) => (args.preset.clone(), p),
            None => bail!(
                "unknown preset {:?} (available: {})",
                args.preset,
                presets::NAMES.join(", ")
            ),
        },
    };

    match (args.dt, args.steps) {
        // Same simulated time at the new increment
        (Some(dt), None) => params.rescale_dt(dt)?,
        (dt, steps) => {
            if let Some(dt) = dt {
                params.dt = dt;
            }
            if let Some(steps) = steps {
                params.steps = steps;
            }
        }
    }
    Ok((name, params))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let (name, params) = load_params(&args)?;

    let result = sim::simulate(&params).context("simulation rejected its parameters")?;
    let summary = RunSummary::from_result(&params, &result);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  TRAJECTORY SIMULATION — {}", name);
    println!("====================================================================");
    println!();
    println!("  Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  G:             {:>12.4e}     M:            {:>12.4e}",
        params.g, params.central_mass
    );
    println!(
        "  Thrust coeff:  {:>12.4e}     Drag coeff:   {:>12.4e}",
        params.thrust_coefficient, params.drag_coefficient
    );
    println!(
        "  Body radius:   {:>12.4e}     dt:           {:>12.4e}",
        params.central_body_radius, params.dt
    );
    println!(
        "  Start r:       {:>12.4e}     Start speed:  {:>12.4e}",
        params.initial.radius(),
        params.initial.speed()
    );
    println!("  Steps:         {:>12}", params.steps);
    println!();

    println!("  Outcome");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  {}", result.outcome);
    println!();

    println!("  Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Samples:       {:>12}", summary.samples);
    println!("  Duration:      {:>12.4e}", summary.duration);
    println!(
        "  Min r:         {:>12.4e}     Max r:        {:>12.4e}",
        summary.min_radius, summary.max_radius
    );
    println!("  Final r:       {:>12.4e}", summary.final_radius);
    println!(
        "  Energy:        {:>12.4e} -> {:.4e}",
        summary.initial_energy, summary.final_energy
    );
    println!(
        "  Ang. momentum: {:>12.4e} -> {:.4e}",
        summary.initial_angular_momentum, summary.final_angular_momentum
    );
    println!();

    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>8}  {:>12}  {:>13}  {:>13}  {:>13}",
        "step", "t", "x", "y", "r"
    );
    println!("  {}", "─".repeat(66));
    for r in table::sample_rows(&result.trajectory, args.rows) {
        println!(
            "  {:>8}  {:>12.4}  {:>13.6e}  {:>13.6e}  {:>13.6e}",
            r.index, r.time, r.x, r.y, r.radius
        );
    }
    println!();

    if let Some(path) = &args.csv {
        csv::write_trajectory_file(path, &result.trajectory)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("  Exported: {}", path.display());
    }
    if let Some(path) = &args.json {
        json::write_summary_file(path, &name, &summary)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("  Exported: {}", path.display());
    }
    println!("====================================================================");
    println!();

    Ok(())
}
