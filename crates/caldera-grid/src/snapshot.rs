//! Owned copy of one assembled phase.
//!
//! A [`Snapshot`] is produced by the root after a gather. It owns its data,
//! so it can outlive the step and cross thread boundaries to an observer.

/// A `size × size` copy of one phase, tagged with the step it was taken at.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    step: u64,
    size: usize,
    values: Vec<f64>,
}

impl Snapshot {
    /// Build a snapshot from x-major values.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != size * size`.
    pub fn new(step: u64, size: usize, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            size * size,
            "snapshot of side {size} needs {} values",
            size * size
        );
        Self { step, size, values }
    }

    /// The step this snapshot was taken at.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell `[x][y]`.
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.values[x * self.size + y]
    }

    /// Row `x`.
    pub fn row(&self, x: usize) -> &[f64] {
        &self.values[x * self.size..(x + 1) * self.size]
    }

    /// All values, x-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// `floor(value / 2)` of cell `[x][y]`, the integer shown in reports.
    pub fn halved(&self, x: usize, y: usize) -> i64 {
        (self.get(x, y) / 2.0).floor() as i64
    }

    /// Largest absolute cell difference to `other`.
    ///
    /// Returns `f64::INFINITY` if the sizes differ.
    pub fn max_abs_diff(&self, other: &Snapshot) -> f64 {
        if self.size != other.size {
            return f64::INFINITY;
        }
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let snap = Snapshot::new(3, 2, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(snap.step(), 3);
        assert_eq!(snap.size(), 2);
        assert_eq!(snap.get(1, 0), 3.0);
        assert_eq!(snap.row(0), &[1.0, 2.0]);
        assert_eq!(snap.values().len(), 4);
    }

    #[test]
    fn halved_floors() {
        let snap = Snapshot::new(0, 2, vec![19.0, 4.75, -1.0, 0.0]);
        assert_eq!(snap.halved(0, 0), 9);
        assert_eq!(snap.halved(0, 1), 2);
        assert_eq!(snap.halved(1, 0), -1);
        assert_eq!(snap.halved(1, 1), 0);
    }

    #[test]
    fn diff_between_snapshots() {
        let a = Snapshot::new(0, 2, vec![1.0, 2.0, 3.0, 4.0]);
        let b = Snapshot::new(0, 2, vec![1.0, 2.5, 3.0, 3.0]);
        assert_eq!(a.max_abs_diff(&b), 1.0);
        assert_eq!(a.max_abs_diff(&a), 0.0);
        let c = Snapshot::new(0, 1, vec![0.0]);
        assert!(a.max_abs_diff(&c).is_infinite());
    }

    #[test]
    #[should_panic(expected = "needs 9 values")]
    fn wrong_length_panics() {
        let _ = Snapshot::new(0, 3, vec![0.0; 8]);
    }
}
