//! Integration test: the worker count does not change the result.
//!
//! Every run is compared bit for bit against the unpartitioned reference
//! simulation: each per-step snapshot the root reports and the final field.

use caldera_core::{Physics, SimParams};
use caldera_test_utils::{run_cluster, serial_run};
use proptest::prelude::*;

fn params(size: usize, max_time: u64, heat_time: u64) -> SimParams {
    SimParams {
        size,
        max_time,
        heat_time,
        interval: 1,
    }
}

fn assert_matches_serial(params: SimParams, workers: usize) {
    let reference = serial_run(&params, &Physics::default());
    let (summary, observer) = run_cluster(params, workers)
        .unwrap_or_else(|e| panic!("{workers} workers on {params:?}: {e}"));

    assert_eq!(observer.snapshots.len(), reference.steps.len());
    for (got, want) in observer.snapshots.iter().zip(&reference.steps) {
        assert_eq!(
            got, want,
            "{workers} workers diverge at step {} of {params:?}",
            want.step()
        );
    }
    assert_eq!(summary.field, reference.final_field);
    assert_eq!(summary.steps, params.max_time);
}

// ── Fixed cases ─────────────────────────────────────────────────────

#[test]
fn divisors_of_twelve() {
    for workers in [1, 2, 3, 4, 6, 12] {
        assert_matches_serial(params(12, 30, 15), workers);
    }
}

#[test]
fn single_row_edge_owners() {
    // Every rank owns exactly one row, so both edge owners mirror from
    // halo rows.
    for size in [3, 4, 5, 8] {
        assert_matches_serial(params(size, 12, 6), size);
    }
}

#[test]
fn last_rank_absorbs_remainder() {
    for workers in [3, 5, 7] {
        assert_matches_serial(params(10, 20, 20), workers);
    }
}

#[test]
fn heat_outlasting_the_run() {
    assert_matches_serial(params(9, 6, 100), 3);
}

#[test]
fn tiny_grids() {
    assert_matches_serial(params(1, 3, 3), 1);
    assert_matches_serial(params(2, 3, 3), 2);
}

#[test]
fn no_heat_stays_cold() {
    let (summary, observer) = run_cluster(params(10, 15, 0), 3).unwrap();
    for snap in observer.snapshots.iter().chain([&summary.field]) {
        assert!(snap.values().iter().all(|&v| v == 0.0), "step {}", snap.step());
    }
}

#[test]
fn heat_reapplied_every_step_while_on() {
    let (_, observer) = run_cluster(params(12, 8, 8), 4).unwrap();
    for snap in &observer.snapshots {
        for x in 4..8 {
            assert_eq!(snap.get(x, 0), 19.0, "[{x}][0] at step {}", snap.step());
        }
    }
}

#[test]
fn twelve_rows_four_and_five_workers_converge() {
    let p = SimParams {
        interval: 0,
        ..params(12, 1500, 1500)
    };
    let (four, _) = run_cluster(p, 4).unwrap();
    let (five, _) = run_cluster(p, 5).unwrap();
    assert_eq!(four.field, five.field);

    // Near steady state consecutive steps barely differ.
    let prev = SimParams {
        max_time: 1499,
        ..p
    };
    let (four_prev, _) = run_cluster(prev, 4).unwrap();
    assert!(four.field.max_abs_diff(&four_prev.field) < 1e-3);
}

// ── Properties ──────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn divisor_worker_counts_match_single_worker(
        size in 4usize..16,
        pick in any::<prop::sample::Index>(),
        max_time in 0u64..10,
        heat_time in 0u64..12,
    ) {
        let divisors: Vec<usize> = (1..=size).filter(|k| size % k == 0).collect();
        let workers = divisors[pick.index(divisors.len())];
        let p = params(size, max_time, heat_time);

        let (single, single_obs) = run_cluster(p, 1).unwrap();
        let (split, split_obs) = run_cluster(p, workers).unwrap();
        prop_assert_eq!(single_obs.snapshots, split_obs.snapshots);
        prop_assert_eq!(single.field, split.field);
    }

    #[test]
    fn any_worker_count_completes(size in 1usize..14, max_time in 0u64..6, workers in 1usize..14) {
        let workers = 1 + (workers - 1) % size;
        let p = params(size, max_time, max_time / 2);
        let (summary, observer) = run_cluster(p, workers).unwrap();
        prop_assert_eq!(summary.steps, max_time);
        prop_assert_eq!(observer.snapshots.len() as u64, max_time);
        prop_assert_eq!(summary.field, serial_run(&p, &Physics::default()).final_field);
    }
}
