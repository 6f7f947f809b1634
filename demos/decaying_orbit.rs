use std::path::Path;

use orbit_sim::io::{csv, json};
use orbit_sim::io::json::RunSummary;
use orbit_sim::scenario::presets;
use orbit_sim::sim::{self, Outcome};

fn main() {
    let params = presets::decaying_orbit();

    println!("Simulating decaying orbit (net factor {:.3}) ...", params.net_factor());
    let result = sim::simulate(&params).expect("preset parameters are valid");

    match result.outcome {
        Outcome::Impact { step, radius } => {
            println!("Impact at t={:.2} (step {}), r={:.4}", step as f64 * params.dt, step, radius);
        }
        other => println!("{}", other),
    }

    let summary = RunSummary::from_result(&params, &result);
    csv::write_trajectory_file(Path::new("decaying_orbit.csv"), &result.trajectory)
        .expect("Failed to write CSV");
    json::write_summary_file(Path::new("decaying_orbit.json"), "decaying-orbit", &summary)
        .expect("Failed to write JSON");

    println!("Exported: decaying_orbit.csv, decaying_orbit.json");
}
