use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::physics::gravity::{specific_angular_momentum, specific_energy};
use crate::scenario::SimParams;
use crate::sim::{Outcome, SimResult};

/// Summary statistics computed from one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub outcome: &'static str,
    pub message: String,
    pub impact_step: Option<usize>,
    pub samples: usize,
    pub steps_requested: usize,
    pub dt: f64,
    pub duration: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub final_radius: f64,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub initial_angular_momentum: f64,
    pub final_angular_momentum: f64,
}

impl RunSummary {
    pub fn from_result(params: &SimParams, result: &SimResult) -> Self {
        let radii = || result.trajectory.iter().map(|p| p.norm());
        let mu = params.mu();

        RunSummary {
            outcome: result.outcome.tag(),
            message: result.outcome.to_string(),
            impact_step: match result.outcome {
                Outcome::Impact { step, .. } => Some(step),
                _ => None,
            },
            samples: result.trajectory.len(),
            steps_requested: params.steps,
            dt: params.dt,
            duration: result.trajectory.duration(),
            min_radius: radii().fold(f64::INFINITY, f64::min),
            max_radius: radii().fold(0.0_f64, f64::max),
            final_radius: result.final_state.radius(),
            initial_energy: specific_energy(&params.initial, mu),
            final_energy: specific_energy(&result.final_state, mu),
            initial_angular_momentum: specific_angular_momentum(&params.initial),
            final_angular_momentum: specific_angular_momentum(&result.final_state),
        }
    }

    /// Relative change in specific energy over the run. A parabolic start
    /// (zero energy) has no scale, so the absolute change is returned instead.
    pub fn energy_drift(&self) -> f64 {
        let change = (self.final_energy - self.initial_energy).abs();
        if self.initial_energy == 0.0 {
            change
        } else {
            change / self.initial_energy.abs()
        }
    }
}

#[derive(Serialize)]
struct SummaryDoc<'a> {
    scenario: &'a str,
    summary: &'a RunSummary,
}

/// Write run summary as pretty JSON to a writer.
pub fn write_summary<W: Write>(writer: &mut W, scenario: &str, summary: &RunSummary) -> io::Result<()> {
    let doc = SummaryDoc { scenario, summary };
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)
}

/// Write run summary JSON to a file.
pub fn write_summary_file(path: &Path, scenario: &str, summary: &RunSummary) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, scenario, summary)
}
