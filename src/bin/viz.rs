use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points, Polygon};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use orbit_sim::io::table::{self, TableRow};
use orbit_sim::scenario::FormInputs;
use orbit_sim::sim::{SimResult, SimWorker};

/// Rows shown in the table; longer runs are subsampled.
const MAX_TABLE_ROWS: usize = 1000;
/// Points drawn on the plot; longer runs are decimated.
const MAX_PLOT_POINTS: usize = 4000;

fn main() -> eframe::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Orbit Trajectory Simulator",
        options,
        Box::new(|_| Ok(Box::new(OrbitViz::default()))),
    )
}

#[derive(Default)]
struct OrbitViz {
    form: FormInputs,
    worker: SimWorker,
    status: String,
    last: Option<LastRun>,
}

/// Result of the latest completed run, pre-processed for drawing.
struct LastRun {
    result: SimResult,
    body_radius: f64,
    rows: Vec<TableRow>,
    plot: Vec<[f64; 2]>,
}

impl LastRun {
    fn new(result: SimResult, body_radius: f64) -> Self {
        let rows = table::sample_rows(&result.trajectory, MAX_TABLE_ROWS);
        let plot = table::sample_rows(&result.trajectory, MAX_PLOT_POINTS)
            .iter()
            .map(|r| [r.x, r.y])
            .collect();
        Self { result, body_radius, rows, plot }
    }
}

impl OrbitViz {
    fn run(&mut self, ctx: &egui::Context) {
        match self.form.to_params() {
            Ok(params) => {
                let repaint = ctx.clone();
                self.worker.submit_with(params, move || repaint.request_repaint());
                self.status = "Running...".into();
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.status = format!("Input error: {}", e);
            }
        }
    }

    fn collect(&mut self) {
        if let Some(done) = self.worker.poll() {
            match done {
                Ok(result) => {
                    self.status = result.outcome.to_string();
                    // Body radius is a fixed default for form-driven runs.
                    let radius = orbit_sim::scenario::config::DEFAULT_BODY_RADIUS;
                    self.last = Some(LastRun::new(result, radius));
                }
                Err(e) => self.status = format!("Rejected: {}", e),
            }
        }
    }

    fn field(ui: &mut egui::Ui, label: &str, text: &mut String) {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(text).desired_width(90.0));
    }
}

impl eframe::App for OrbitViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.collect();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                Self::field(ui, "Mass (kg)", &mut self.form.central_mass);
                Self::field(ui, "Speed (m/s)", &mut self.form.initial_speed);
                Self::field(ui, "Time (s)", &mut self.form.total_time);
                Self::field(ui, "Drag", &mut self.form.drag_coefficient);
                Self::field(ui, "Thrust", &mut self.form.thrust_coefficient);
                if ui.button("Run").clicked() {
                    self.run(ctx);
                }
                if self.worker.is_busy() {
                    ui.spinner();
                }
            });
            ui.label(self.status.as_str());
        });

        egui::SidePanel::right("table").min_width(420.0).show(ctx, |ui| {
            ui.heading("Trajectory");
            let Some(last) = &self.last else {
                ui.label("No data");
                return;
            };
            ui.label(format!(
                "{} samples, showing {}",
                last.result.trajectory.len(),
                last.rows.len()
            ));
            let row_height = ui.text_style_height(&egui::TextStyle::Body);
            egui::ScrollArea::vertical().show_rows(ui, row_height, last.rows.len(), |ui, range| {
                egui::Grid::new("rows").striped(true).num_columns(4).show(ui, |ui| {
                    for r in &last.rows[range] {
                        ui.label(format!("{:.0} s", r.time));
                        ui.label(format!("{:.4e}", r.x));
                        ui.label(format!("{:.4e}", r.y));
                        ui.label(format!("{:.4e}", r.radius));
                        ui.end_row();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // Plot y axis points up, so world coordinates are drawn as-is.
            Plot::new("trajectory")
                .data_aspect(1.0)
                .x_axis_label("x (m)")
                .y_axis_label("y (m)")
                .show(ui, |plot_ui| {
                    let Some(last) = &self.last else { return };
                    let body: PlotPoints = (0..=90)
                        .map(|i| {
                            let a = i as f64 / 90.0 * std::f64::consts::TAU;
                            [last.body_radius * a.cos(), last.body_radius * a.sin()]
                        })
                        .collect();
                    plot_ui.polygon(Polygon::new("Central body", body));
                    plot_ui.points(Points::new("Centre", vec![[0.0, 0.0]]).radius(3.0));
                    plot_ui.line(Line::new("Trajectory", PlotPoints::from(last.plot.clone())));
                });
        });
    }
}
