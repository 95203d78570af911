//! Distributed timestep loop for Caldera heat diffusion.
//!
//! A run is a fixed group of workers, one thread per rank, each owning a
//! contiguous block of grid rows. Every step each worker applies the
//! boundary rules, trades halo rows with its neighbours, and advances its
//! rows with the forward-Euler stencil; the root additionally assembles the
//! whole grid and hands it to a [`StepObserver`].
//!
//! # Entry point
//!
//! ```no_run
//! use caldera_core::SimParams;
//! use caldera_engine::{Cluster, ConsoleReporter, RunConfig};
//!
//! let params = SimParams { size: 100, max_time: 1000, heat_time: 500, interval: 100 };
//! let cluster = Cluster::new(RunConfig::new(params, 4))?;
//! let mut reporter = ConsoleReporter::new(std::io::stdout(), params);
//! let summary = cluster.run(&mut reporter)?;
//! assert_eq!(summary.steps, 1000);
//! # Ok::<(), caldera_core::RunError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cluster;
pub mod config;
pub mod gather;
pub mod halo;
pub mod report;
pub mod worker;

pub use cluster::{Cluster, RunSummary};
pub use config::{RunConfig, WorkerConfig};
pub use report::{ConsoleReporter, NullObserver, StepObserver};
pub use worker::{Worker, WorkerOutcome};
