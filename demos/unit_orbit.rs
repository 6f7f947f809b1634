use orbit_sim::io::json::RunSummary;
use orbit_sim::io::table;
use orbit_sim::scenario::presets;
use orbit_sim::sim;

fn main() {
    let params = presets::unit_circle();
    let result = sim::simulate(&params).expect("preset parameters are valid");
    let summary = RunSummary::from_result(&params, &result);

    println!("{}", result.outcome);
    println!("Samples:      {}", summary.samples);
    println!("Radius range: {:.9} .. {:.9}", summary.min_radius, summary.max_radius);
    println!("Energy drift: {:.3e}", summary.energy_drift());
    println!();

    for r in table::sample_rows(&result.trajectory, 12) {
        println!("  t={:>6.2}  x={:>9.5}  y={:>9.5}", r.time, r.x, r.y);
    }
}
