//! Observer that keeps everything it is shown.

use std::io;
use std::time::Duration;

use caldera_engine::StepObserver;
use caldera_grid::Snapshot;

/// Records every snapshot and the reported elapsed time.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    pub snapshots: Vec<Snapshot>,
    pub elapsed: Option<Duration>,
    /// Fail `on_step` at this step with a broken pipe.
    pub fail_at: Option<u64>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// An observer that fails when shown step `step`.
    pub fn failing_at(step: u64) -> Self {
        Self {
            fail_at: Some(step),
            ..Self::default()
        }
    }
}

impl StepObserver for RecordingObserver {
    fn on_step(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        if self.fail_at == Some(snapshot.step()) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "observer closed"));
        }
        self.snapshots.push(snapshot.clone());
        Ok(())
    }

    fn finish(&mut self, elapsed: Duration) -> io::Result<()> {
        self.elapsed = Some(elapsed);
        Ok(())
    }
}
