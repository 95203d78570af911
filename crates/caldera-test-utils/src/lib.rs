//! Test utilities for Caldera development.
//!
//! - [`serial_run`]: unpartitioned reference simulation
//! - [`fixtures`]: seeded and row-constant fields
//! - [`RecordingObserver`]: keeps every snapshot a run produces
//! - [`FaultyTransport`]: corrupts one message to exercise protocol errors
//! - [`run_cluster`]: run a configuration and collect its snapshots

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod faulty;
pub mod fixtures;
pub mod observer;
pub mod reference;

pub use faulty::{Fault, FaultyTransport};
pub use observer::RecordingObserver;
pub use reference::{serial_run, SerialRun};

use caldera_core::{RunError, SimParams};
use caldera_engine::{Cluster, RunConfig, RunSummary};

/// Run `params` with `workers` ranks and default physics.
pub fn run_cluster(
    params: SimParams,
    workers: usize,
) -> Result<(RunSummary, RecordingObserver), RunError> {
    let cluster = Cluster::new(RunConfig::new(params, workers))?;
    let mut observer = RecordingObserver::new();
    let summary = cluster.run(&mut observer)?;
    Ok((summary, observer))
}
