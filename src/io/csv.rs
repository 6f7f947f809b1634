use std::io::{self, Write};
use std::path::Path;

use crate::io::table::{all_rows, TableRow};
use crate::sim::Trajectory;

/// Write table rows as CSV.
///
/// Columns: index, time, x, y, radius
pub fn write_rows<W: Write>(writer: &mut W, rows: &[TableRow]) -> io::Result<()> {
    writeln!(writer, "index,time,x,y,radius")?;

    for r in rows {
        writeln!(
            writer,
            "{},{:.6},{:.9e},{:.9e},{:.9e}",
            r.index, r.time, r.x, r.y, r.radius,
        )?;
    }

    Ok(())
}

/// Write every trajectory sample as CSV.
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    write_rows(writer, &all_rows(trajectory))
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &Path, trajectory: &Trajectory) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_trajectory(&mut file, trajectory)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn csv_output_has_header_and_rows() {
        let mut traj = Trajectory::with_capacity(0.5, 2);
        traj.push(Vector2::new(1.0, 0.0));
        traj.push(Vector2::new(0.0, 2.0));

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "index,time,x,y,radius");
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0,0.000000,"));
        assert!(lines[2].starts_with("1,0.500000,"));
    }
}
