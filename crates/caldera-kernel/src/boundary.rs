//! Boundary rules: global-edge duplication and the heat source.
//!
//! Two independent rule sets run on the current phase each step, before
//! the halo exchange, restricted to the rows the worker owns:
//!
//! 1. **Global edges.** Row 0 copies row 1 and row `size-1` copies row
//!    `size-2` (edge owners only). Every owned row copies its column 1 into
//!    column 0 and column `size-2` into column `size-1`.
//! 2. **Heat source.** While active, cell `[x][0]` is held at
//!    [`HEAT_SOURCE_TEMPERATURE`] for every owned `x` in the heating band.
//!
//! [`refresh_edges`] re-derives the global edge rows after the exchange.
//! An edge owner that owns a single row mirrors from a halo row, which is
//! only current once the exchange has run.

use std::ops::Range;

use caldera_core::{SimParams, HEAT_SOURCE_TEMPERATURE};
use caldera_grid::{HeatField, Phase};
use caldera_space::OwnedRange;

/// The heating band and whether it is active at a given step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeatSource {
    /// Rows whose bottom cell is heated.
    pub band: Range<usize>,
    /// Whether the source is on this step.
    pub active: bool,
}

impl HeatSource {
    /// The heat source for step `t` of a run.
    pub fn at_step(params: &SimParams, t: u64) -> Self {
        Self {
            band: params.heat_band(),
            active: params.heating(t),
        }
    }

    /// A source that never heats.
    pub fn off() -> Self {
        Self {
            band: 0..0,
            active: false,
        }
    }

    fn apply(&self, field: &mut HeatField, phase: Phase, rows: Range<usize>) {
        if !self.active {
            return;
        }
        let lo = rows.start.max(self.band.start);
        let hi = rows.end.min(self.band.end);
        for x in lo..hi {
            field.set(phase, x, 0, HEAT_SOURCE_TEMPERATURE);
        }
    }
}

/// Apply both boundary rule sets to the rows `range` owns.
///
/// Grids below two rows have nothing to mirror; only the heat source can
/// apply there.
pub fn enforce(field: &mut HeatField, phase: Phase, range: OwnedRange, source: &HeatSource) {
    let size = field.size();
    if size >= 2 {
        if range.contains(0) {
            field.copy_row(phase, 1, 0);
        }
        if range.contains(size - 1) {
            field.copy_row(phase, size - 2, size - 1);
        }
        for x in range.rows() {
            mirror_columns(field, phase, x);
        }
    }
    source.apply(field, phase, range.rows());
}

/// Re-derive global edge rows held in local storage after a halo exchange.
///
/// For each global edge row (`0`, `size-1`) that this worker holds, owned
/// or as a halo, together with its mirror source (`1`, `size-2`), the edge
/// row is rebuilt exactly as [`enforce`] would on a single worker. When the
/// edge owner also owns the mirror source this is a no-op.
pub fn refresh_edges(
    field: &mut HeatField,
    phase: Phase,
    range: OwnedRange,
    source: &HeatSource,
) {
    let size = field.size();
    if size < 2 {
        return;
    }
    let held = range.held(size);
    for (edge, mirror) in [(0, 1), (size - 1, size - 2)] {
        if held.contains(&edge) && held.contains(&mirror) {
            field.copy_row(phase, mirror, edge);
            mirror_columns(field, phase, edge);
            source.apply(field, phase, edge..edge + 1);
        }
    }
}

/// Copy column 1 into column 0 and column `size-2` into column `size-1`.
fn mirror_columns(field: &mut HeatField, phase: Phase, x: usize) {
    let row = field.row_mut(phase, x);
    let n = row.len();
    row[0] = row[1];
    row[n - 1] = row[n - 2];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(size: usize, heat_time: u64) -> SimParams {
        SimParams {
            size,
            max_time: 10,
            heat_time,
            interval: 0,
        }
    }

    fn ramp(size: usize) -> HeatField {
        let mut field = HeatField::new(size);
        for x in 0..size {
            for y in 0..size {
                field.set(Phase::Zero, x, y, (x * 10 + y) as f64);
            }
        }
        field
    }

    #[test]
    fn single_worker_mirrors_all_edges() {
        let mut field = ramp(4);
        let all = OwnedRange { start: 0, end: 3 };
        enforce(&mut field, Phase::Zero, all, &HeatSource::off());

        // Row 0 copies row 1, then its own columns mirror.
        assert_eq!(field.row(Phase::Zero, 0), &[11.0, 11.0, 12.0, 12.0]);
        assert_eq!(field.row(Phase::Zero, 3), &[21.0, 21.0, 22.0, 22.0]);
        assert_eq!(field.row(Phase::Zero, 1), &[11.0, 11.0, 12.0, 12.0]);
        assert_eq!(field.row(Phase::Zero, 2), &[21.0, 21.0, 22.0, 22.0]);
    }

    #[test]
    fn interior_worker_touches_only_owned_columns() {
        let mut field = ramp(6);
        let before = field.clone();
        let mid = OwnedRange { start: 2, end: 3 };
        enforce(&mut field, Phase::Zero, mid, &HeatSource::off());

        for x in [0, 1, 4, 5] {
            assert_eq!(field.row(Phase::Zero, x), before.row(Phase::Zero, x));
        }
        assert_eq!(field.row(Phase::Zero, 2), &[21.0, 21.0, 22.0, 23.0, 24.0, 24.0]);
        assert_eq!(field.row(Phase::Zero, 3), &[31.0, 31.0, 32.0, 33.0, 34.0, 34.0]);
    }

    #[test]
    fn only_edge_owners_copy_edge_rows() {
        let mut field = ramp(6);
        let left = OwnedRange { start: 0, end: 2 };
        enforce(&mut field, Phase::Zero, left, &HeatSource::off());
        assert_eq!(field.get(Phase::Zero, 0, 3), 13.0);
        // Row 5 is not owned, so it keeps its ramp value.
        assert_eq!(field.get(Phase::Zero, 5, 3), 53.0);

        let right = OwnedRange { start: 3, end: 5 };
        enforce(&mut field, Phase::Zero, right, &HeatSource::off());
        assert_eq!(field.get(Phase::Zero, 5, 3), 43.0);
    }

    #[test]
    fn heat_applies_to_band_intersection() {
        let p = params(12, 5);
        let source = HeatSource::at_step(&p, 0);
        assert_eq!(source.band, 4..8);

        let mut field = HeatField::new(12);
        enforce(&mut field, Phase::One, OwnedRange { start: 3, end: 5 }, &source);
        let heated: Vec<usize> = (0..12)
            .filter(|&x| field.get(Phase::One, x, 0) == HEAT_SOURCE_TEMPERATURE)
            .collect();
        assert_eq!(heated, vec![4, 5]);

        enforce(&mut field, Phase::One, OwnedRange { start: 6, end: 8 }, &source);
        let heated: Vec<usize> = (0..12)
            .filter(|&x| field.get(Phase::One, x, 0) == HEAT_SOURCE_TEMPERATURE)
            .collect();
        assert_eq!(heated, vec![4, 5, 6, 7]);
    }

    #[test]
    fn heat_stops_after_heat_time() {
        let p = params(12, 2);
        assert!(HeatSource::at_step(&p, 1).active);
        let source = HeatSource::at_step(&p, 2);
        assert!(!source.active);

        let mut field = HeatField::new(12);
        enforce(&mut field, Phase::Zero, OwnedRange { start: 0, end: 11 }, &source);
        assert!(field.phase(Phase::Zero).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn heat_overrides_mirrored_bottom_cell() {
        let mut field = ramp(6);
        let source = HeatSource::at_step(&params(6, 1), 0);
        enforce(&mut field, Phase::Zero, OwnedRange { start: 0, end: 5 }, &source);
        assert_eq!(field.get(Phase::Zero, 2, 0), HEAT_SOURCE_TEMPERATURE);
        assert_eq!(field.get(Phase::Zero, 3, 0), HEAT_SOURCE_TEMPERATURE);
        assert_eq!(field.get(Phase::Zero, 4, 0), 41.0);
    }

    #[test]
    fn refresh_rebuilds_single_row_left_edge() {
        let mut field = ramp(5);
        let source = HeatSource::off();
        // Rank owning only row 0: its halo row 1 just arrived.
        refresh_edges(&mut field, Phase::Zero, OwnedRange { start: 0, end: 0 }, &source);
        assert_eq!(field.row(Phase::Zero, 0), &[11.0, 11.0, 12.0, 13.0, 13.0]);
        // Row 4 is not held by this rank.
        assert_eq!(field.row(Phase::Zero, 4), &[40.0, 41.0, 42.0, 43.0, 44.0]);
    }

    #[test]
    fn refresh_rebuilds_halo_edge_row() {
        let mut field = ramp(5);
        // Rank owning rows 1..=2 holds row 0 as its left halo.
        refresh_edges(
            &mut field,
            Phase::Zero,
            OwnedRange { start: 1, end: 2 },
            &HeatSource::off(),
        );
        assert_eq!(field.row(Phase::Zero, 0), &[11.0, 11.0, 12.0, 13.0, 13.0]);
    }

    #[test]
    fn refresh_is_noop_after_full_enforcement() {
        let source = HeatSource::at_step(&params(9, 3), 0);
        let mut field = ramp(9);
        let all = OwnedRange { start: 0, end: 8 };
        enforce(&mut field, Phase::Zero, all, &source);
        let enforced = field.clone();
        refresh_edges(&mut field, Phase::Zero, all, &source);
        assert_eq!(field, enforced);
    }

    #[test]
    fn tiny_grids_do_not_panic() {
        let source = HeatSource::at_step(&params(1, 1), 0);
        let mut one = HeatField::new(1);
        enforce(&mut one, Phase::Zero, OwnedRange { start: 0, end: 0 }, &source);
        refresh_edges(&mut one, Phase::Zero, OwnedRange { start: 0, end: 0 }, &source);
        assert_eq!(one.get(Phase::Zero, 0, 0), 0.0);

        let mut two = ramp(2);
        enforce(&mut two, Phase::Zero, OwnedRange { start: 0, end: 1 }, &source);
        refresh_edges(&mut two, Phase::Zero, OwnedRange { start: 1, end: 1 }, &source);
    }
}
