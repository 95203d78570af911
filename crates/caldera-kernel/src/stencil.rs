//! Explicit forward-Euler update of the 5-point Laplacian.
//!
//! Reads the current phase and writes the other, so the update of one cell
//! never observes the update of its neighbours. Only interior cells are
//! written; the edge rows and columns of the next phase keep whatever they
//! held until the boundary rules overwrite them next step.

use std::ops::Range;

use caldera_core::Physics;
use caldera_grid::{HeatField, Phase};

/// Forward-Euler diffusion step with a fixed coefficient.
///
/// For each interior cell:
///
/// ```text
/// next[x][y] = c + r*(cur[x+1][y] - 2c + cur[x-1][y])
///                + r*(cur[x][y+1] - 2c + cur[x][y-1])
/// ```
///
/// with `c = cur[x][y]` and `r = a * dt / dd²`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForwardEuler {
    r: f64,
}

impl ForwardEuler {
    /// Stencil for the given physical constants.
    pub fn new(physics: &Physics) -> Self {
        Self {
            r: physics.coefficient(),
        }
    }

    /// The coefficient `a * dt / dd²`.
    pub fn coefficient(&self) -> f64 {
        self.r
    }

    /// Update rows `rows` of `current.other()` from `current`.
    ///
    /// `rows` must already exclude the global edge rows (see
    /// `OwnedRange::interior`); columns `0` and `size - 1` are always
    /// skipped. Rows `rows.start - 1` and `rows.end` of `current` must be
    /// valid, which the halo exchange guarantees for owned ranges.
    pub fn step(&self, field: &mut HeatField, current: Phase, rows: Range<usize>) {
        let n = field.size();
        if n < 3 || rows.is_empty() {
            return;
        }
        debug_assert!(rows.start >= 1 && rows.end < n, "rows {rows:?} reach the global edge");

        let r = self.r;
        let (cur, next) = field.split(current);
        for x in rows {
            let base = x * n;
            for y in 1..n - 1 {
                let i = base + y;
                let c = cur[i];
                next[i] = c
                    + r * (cur[i + n] - 2.0 * c + cur[i - n])
                    + r * (cur[i + 1] - 2.0 * c + cur[i - 1]);
            }
        }
    }
}

impl Default for ForwardEuler {
    fn default() -> Self {
        Self::new(&Physics::default())
    }
}
