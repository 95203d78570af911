//! Single-threaded reference simulation.
//!
//! A direct, unpartitioned rendering of the diffusion loop over a
//! `[phase][x][y]` nested array. It shares no code with the engine, so
//! engine runs can be compared against it bit for bit.

use caldera_core::{Physics, SimParams, HEAT_SOURCE_TEMPERATURE};
use caldera_grid::Snapshot;

/// Every per-step snapshot of a serial run plus the final field.
#[derive(Clone, Debug, PartialEq)]
pub struct SerialRun {
    /// The current phase after the boundary rules, one per step.
    pub steps: Vec<Snapshot>,
    /// The phase written by the last stencil pass, tagged `max_time`.
    pub final_field: Snapshot,
}

/// Run `params` on one thread with no decomposition.
pub fn serial_run(params: &SimParams, physics: &Physics) -> SerialRun {
    let size = params.size;
    let r = physics.coefficient();
    let mut z = vec![vec![vec![0.0f64; size]; size]; 2];
    let mut steps = Vec::with_capacity(params.max_time as usize);

    for t in 0..params.max_time {
        let p = (t % 2) as usize;

        if size >= 2 {
            for y in 0..size {
                z[p][0][y] = z[p][1][y];
                z[p][size - 1][y] = z[p][size - 2][y];
            }
            for x in 0..size {
                z[p][x][0] = z[p][x][1];
                z[p][x][size - 1] = z[p][x][size - 2];
            }
        }
        if t < params.heat_time {
            for x in size / 3..size / 3 * 2 {
                z[p][x][0] = HEAT_SOURCE_TEMPERATURE;
            }
        }

        steps.push(snapshot(&z[p], t));

        let p2 = 1 - p;
        for x in 1..size.saturating_sub(1) {
            for y in 1..size - 1 {
                z[p2][x][y] = z[p][x][y]
                    + r * (z[p][x + 1][y] - 2.0 * z[p][x][y] + z[p][x - 1][y])
                    + r * (z[p][x][y + 1] - 2.0 * z[p][x][y] + z[p][x][y - 1]);
            }
        }
    }

    let last = (params.max_time % 2) as usize;
    SerialRun {
        final_field: snapshot(&z[last], params.max_time),
        steps,
    }
}

fn snapshot(phase: &[Vec<f64>], step: u64) -> Snapshot {
    let size = phase.len();
    let values = phase.iter().flatten().copied().collect();
    Snapshot::new(step, size, values)
}
