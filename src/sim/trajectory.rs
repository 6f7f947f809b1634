use nalgebra::Vector2;

/// Ordered positions sampled every `dt`, starting with the initial position.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub dt: f64,
    pub points: Vec<Vector2<f64>>,
}

impl Trajectory {
    pub fn with_capacity(dt: f64, capacity: usize) -> Self {
        Self { dt, points: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, pos: Vector2<f64>) {
        self.points.push(pos);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Vector2<f64>> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Vector2<f64>> {
        self.points.last()
    }

    /// Elapsed time of sample `index`.
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 * self.dt
    }

    /// Elapsed time of the last sample.
    pub fn duration(&self) -> f64 {
        self.time_at(self.len().saturating_sub(1))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector2<f64>> {
        self.points.iter()
    }

    /// (time, position) pairs in order.
    pub fn timed(&self) -> impl Iterator<Item = (f64, &Vector2<f64>)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(move |(i, p)| (self.time_at(i), p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_time_is_index_times_dt() {
        let mut t = Trajectory::with_capacity(0.5, 3);
        t.push(Vector2::new(0.0, 0.0));
        t.push(Vector2::new(1.0, 0.0));
        t.push(Vector2::new(2.0, 0.0));
        assert_eq!(t.time_at(2), 1.0);
        assert_eq!(t.duration(), 1.0);
        let times: Vec<f64> = t.timed().map(|(time, _)| time).collect();
        assert_eq!(times, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn empty_trajectory_has_zero_duration() {
        let t = Trajectory::with_capacity(1.0, 0);
        assert!(t.is_empty());
        assert_eq!(t.duration(), 0.0);
    }
}
