use crate::sim::Trajectory;

/// One displayed row of the trajectory table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    pub index: usize,
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Every row, unsampled.
pub fn all_rows(trajectory: &Trajectory) -> Vec<TableRow> {
    (0..trajectory.len()).map(|i| row(trajectory, i)).collect()
}

/// At most `max_rows` rows, taking every Nth sample. The final sample is
/// always shown so an impact point is never hidden by the stride.
pub fn sample_rows(trajectory: &Trajectory, max_rows: usize) -> Vec<TableRow> {
    let len = trajectory.len();
    if len == 0 || max_rows == 0 {
        return Vec::new();
    }
    let stride = len.div_ceil(max_rows);
    let mut rows: Vec<TableRow> = (0..len).step_by(stride).map(|i| row(trajectory, i)).collect();

    let last = len - 1;
    if rows.last().map(|r| r.index) != Some(last) {
        if rows.len() >= max_rows {
            rows.pop();
        }
        rows.push(row(trajectory, last));
    }
    rows
}

fn row(trajectory: &Trajectory, index: usize) -> TableRow {
    let p = trajectory.points[index];
    TableRow {
        index,
        time: trajectory.time_at(index),
        x: p.x,
        y: p.y,
        radius: p.norm(),
    }
}
