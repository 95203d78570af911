//! Step observers: where assembled snapshots go.
//!
//! The root hands every assembled [`Snapshot`] to a [`StepObserver`] and,
//! once the run is over, reports the elapsed wall time through
//! [`StepObserver::finish`]. [`ConsoleReporter`] is the production observer
//! and prints the text format below on its writer.
//!
//! ```text
//! time = <t>
//! <size lines of size integers floor(value / 2), y-outer, x-inner>
//! <blank line>
//! ...
//! Elapsed time = <milliseconds>
//! ```

use std::io::{self, Write};
use std::time::Duration;

use caldera_core::SimParams;
use caldera_grid::Snapshot;

/// Receives the root's assembled snapshots.
pub trait StepObserver {
    /// Called once per step with the assembled current phase.
    fn on_step(&mut self, snapshot: &Snapshot) -> io::Result<()>;

    /// Called once after the last step with the run's wall time.
    fn finish(&mut self, elapsed: Duration) -> io::Result<()> {
        let _ = elapsed;
        Ok(())
    }
}

/// Observer that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl StepObserver for NullObserver {
    fn on_step(&mut self, _snapshot: &Snapshot) -> io::Result<()> {
        Ok(())
    }
}

/// Prints snapshots at the configured cadence and the elapsed time.
///
/// A step is printed when `interval != 0` and either `t % interval == 0` or
/// `t == max_time - 1`.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
    params: SimParams,
    emitted: u64,
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter writing to `out` with the cadence of `params`.
    pub fn new(out: W, params: SimParams) -> Self {
        Self {
            out,
            params,
            emitted: 0,
        }
    }

    /// Number of snapshots printed so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Consume the reporter and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StepObserver for ConsoleReporter<W> {
    fn on_step(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        if !self.params.should_report(snapshot.step()) {
            return Ok(());
        }
        let size = snapshot.size();
        writeln!(self.out, "time = {}", snapshot.step())?;
        for y in 0..size {
            let line: Vec<String> = (0..size)
                .map(|x| snapshot.halved(x, y).to_string())
                .collect();
            writeln!(self.out, "{}", line.join(" "))?;
        }
        writeln!(self.out)?;
        self.emitted += 1;
        Ok(())
    }

    fn finish(&mut self, elapsed: Duration) -> io::Result<()> {
        writeln!(self.out, "Elapsed time = {}", elapsed.as_millis())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(size: usize, max_time: u64, interval: u64) -> SimParams {
        SimParams {
            size,
            max_time,
            heat_time: 0,
            interval,
        }
    }

    fn text(reporter: ConsoleReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn prints_y_outer_x_inner() {
        // [x][y] = 2 * (10x + y) so halved values read back as 10x + y.
        let values: Vec<f64> = (0..2)
            .flat_map(|x| (0..2).map(move |y| 2.0 * (10 * x + y) as f64))
            .collect();
        let mut reporter = ConsoleReporter::new(Vec::new(), params(2, 1, 1));
        reporter.on_step(&Snapshot::new(0, 2, values)).unwrap();
        assert_eq!(reporter.emitted(), 1);
        assert_eq!(text(reporter), "time = 0\n0 10\n1 11\n\n");
    }

    #[test]
    fn floors_negative_halves() {
        let mut reporter = ConsoleReporter::new(Vec::new(), params(1, 1, 1));
        reporter.on_step(&Snapshot::new(0, 1, vec![-0.5])).unwrap();
        assert_eq!(text(reporter), "time = 0\n-1\n\n");
    }

    #[test]
    fn skips_off_cadence_steps() {
        let mut reporter = ConsoleReporter::new(Vec::new(), params(1, 10, 4));
        for t in 0..10 {
            reporter.on_step(&Snapshot::new(t, 1, vec![0.0])).unwrap();
        }
        assert_eq!(reporter.emitted(), 4);
        let out = text(reporter);
        let times: Vec<&str> = out.lines().filter(|l| l.starts_with("time")).collect();
        assert_eq!(times, vec!["time = 0", "time = 4", "time = 8", "time = 9"]);
    }

    #[test]
    fn zero_interval_prints_only_elapsed() {
        let mut reporter = ConsoleReporter::new(Vec::new(), params(1, 3, 0));
        for t in 0..3 {
            reporter.on_step(&Snapshot::new(t, 1, vec![4.0])).unwrap();
        }
        reporter.finish(Duration::from_millis(42)).unwrap();
        assert_eq!(text(reporter), "Elapsed time = 42\n");
    }

    #[test]
    fn write_failure_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let mut reporter = ConsoleReporter::new(Broken, params(1, 1, 1));
        let err = reporter.on_step(&Snapshot::new(0, 1, vec![0.0])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
