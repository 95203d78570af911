//! Double-buffered heat field with ping-pong phases.
//!
//! [`HeatField`] holds two full-size buffers. At step `t` the buffer for
//! [`Phase::of_step(t)`](Phase::of_step) is current (read by the stencil,
//! mutated in place by the boundary rules and the halo/gather copies) and
//! the other one is next (written by the stencil only).
//!
//! The lifecycle per step is:
//! 1. boundary rules and halo rows mutate `current`
//! 2. [`HeatField::split()`] borrows `current` immutably and `next` mutably
//! 3. the following step swaps roles by phase parity; nothing is copied

use std::ops::Range;

use crate::snapshot::Snapshot;

/// One of the two buffers of a [`HeatField`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Current on even steps.
    Zero,
    /// Current on odd steps.
    One,
}

impl Phase {
    /// The current phase at step `t` (`t % 2`).
    pub fn of_step(t: u64) -> Self {
        if t % 2 == 0 {
            Self::Zero
        } else {
            Self::One
        }
    }

    /// The other phase.
    pub fn other(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }

    /// Buffer index (`0` or `1`).
    pub fn index(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

/// Double-buffered `size × size` temperature field, zero-initialized.
///
/// Cell `[x][y]` of a phase lives at `x * size + y`.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatField {
    size: usize,
    buffers: [Vec<f64>; 2],
}

impl HeatField {
    /// Create a zero-filled field with side length `size`.
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        Self {
            size,
            buffers: [vec![0.0; cells], vec![0.0; cells]],
        }
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whole buffer of a phase, x-major.
    pub fn phase(&self, phase: Phase) -> &[f64] {
        &self.buffers[phase.index()]
    }

    /// Mutable whole buffer of a phase, x-major.
    pub fn phase_mut(&mut self, phase: Phase) -> &mut [f64] {
        &mut self.buffers[phase.index()]
    }

    /// Read cell `[x][y]`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not below `size`.
    pub fn get(&self, phase: Phase, x: usize, y: usize) -> f64 {
        assert!(y < self.size, "column {y} outside grid of {}", self.size);
        self.buffers[phase.index()][x * self.size + y]
    }

    /// Write cell `[x][y]`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not below `size`.
    pub fn set(&mut self, phase: Phase, x: usize, y: usize, value: f64) {
        assert!(y < self.size, "column {y} outside grid of {}", self.size);
        self.buffers[phase.index()][x * self.size + y] = value;
    }

    /// Row `x` (all `size` columns).
    pub fn row(&self, phase: Phase, x: usize) -> &[f64] {
        &self.buffers[phase.index()][self.span(x..x + 1)]
    }

    /// Mutable row `x`.
    pub fn row_mut(&mut self, phase: Phase, x: usize) -> &mut [f64] {
        let span = self.span(x..x + 1);
        &mut self.buffers[phase.index()][span]
    }

    /// Rows `rows.start..rows.end` as one contiguous, row-major slice.
    pub fn rows(&self, phase: Phase, rows: Range<usize>) -> &[f64] {
        &self.buffers[phase.index()][self.span(rows)]
    }

    /// Mutable contiguous block of rows.
    pub fn rows_mut(&mut self, phase: Phase, rows: Range<usize>) -> &mut [f64] {
        let span = self.span(rows);
        &mut self.buffers[phase.index()][span]
    }

    /// Overwrite row `to` with the contents of row `from`.
    pub fn copy_row(&mut self, phase: Phase, from: usize, to: usize) {
        let span = self.span(from..from + 1);
        let dest = to * self.size;
        self.buffers[phase.index()].copy_within(span, dest);
    }

    /// Borrow `current` for reading and the other phase for writing.
    pub fn split(&mut self, current: Phase) -> (&[f64], &mut [f64]) {
        let [zero, one] = &mut self.buffers;
        match current {
            Phase::Zero => (zero.as_slice(), one.as_mut_slice()),
            Phase::One => (one.as_slice(), zero.as_mut_slice()),
        }
    }

    /// Copy a phase into an owned [`Snapshot`] tagged with `step`.
    pub fn snapshot(&self, phase: Phase, step: u64) -> Snapshot {
        Snapshot::new(step, self.size, self.phase(phase).to_vec())
    }

    fn span(&self, rows: Range<usize>) -> Range<usize> {
        rows.start * self.size..rows.end * self.size
    }
}
