//! Integration test: exact console output of small runs.

use caldera_core::SimParams;
use caldera_engine::{Cluster, ConsoleReporter, RunConfig};

fn run_text(params: SimParams, workers: usize) -> (String, caldera_engine::RunSummary) {
    let cluster = Cluster::new(RunConfig::new(params, workers)).unwrap();
    let mut reporter = ConsoleReporter::new(Vec::new(), params);
    let summary = cluster.run(&mut reporter).unwrap();
    assert_eq!(reporter.emitted(), summary.snapshots_emitted);
    (String::from_utf8(reporter.into_inner()).unwrap(), summary)
}

/// Everything before the `Elapsed time` line, which varies between runs.
fn body(text: &str) -> &str {
    let at = text.rfind("Elapsed time = ").unwrap();
    &text[..at]
}

#[test]
fn five_by_five_single_step() {
    let params = SimParams {
        size: 5,
        max_time: 1,
        heat_time: 1,
        interval: 1,
    };
    let (text, summary) = run_text(params, 1);

    assert_eq!(
        body(&text),
        "time = 0\n\
         0 9 0 0 0\n\
         0 0 0 0 0\n\
         0 0 0 0 0\n\
         0 0 0 0 0\n\
         0 0 0 0 0\n\
         \n"
    );
    let last = text.lines().last().unwrap();
    let millis = last.strip_prefix("Elapsed time = ").unwrap();
    assert!(millis.parse::<u128>().is_ok(), "bad elapsed line {last:?}");

    // Final phase: only [1][1] picked up heat, 19 * 0.25.
    assert_eq!(summary.field.get(1, 1), 4.75);
    for x in 0..5 {
        for y in 0..5 {
            let expected = if (x, y) == (1, 1) { 2 } else { 0 };
            assert_eq!(summary.field.halved(x, y), expected, "[{x}][{y}]");
        }
    }
}

#[test]
fn worker_count_does_not_change_output() {
    let params = SimParams {
        size: 10,
        max_time: 25,
        heat_time: 10,
        interval: 6,
    };
    let (one, _) = run_text(params, 1);
    for workers in [2, 5, 10] {
        let (many, _) = run_text(params, workers);
        assert_eq!(body(&one), body(&many), "{workers} workers");
    }
}

#[test]
fn cadence_includes_final_step() {
    let params = SimParams {
        size: 6,
        max_time: 10,
        heat_time: 3,
        interval: 4,
    };
    let (text, summary) = run_text(params, 2);
    let times: Vec<&str> = text.lines().filter(|l| l.starts_with("time = ")).collect();
    assert_eq!(times, ["time = 0", "time = 4", "time = 8", "time = 9"]);
    assert_eq!(summary.snapshots_emitted, 4);
}

#[test]
fn zero_interval_prints_only_elapsed() {
    let params = SimParams {
        size: 6,
        max_time: 10,
        heat_time: 3,
        interval: 0,
    };
    let (text, summary) = run_text(params, 3);
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("Elapsed time = "));
    assert_eq!(summary.snapshots_emitted, 0);
}
