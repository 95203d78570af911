//! Caldera: distributed 2D heat diffusion by forward Euler.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Caldera sub-crates. For most users, adding `caldera` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use caldera::prelude::*;
//!
//! let params = SimParams { size: 5, max_time: 1, heat_time: 1, interval: 1 };
//! let cluster = Cluster::new(RunConfig::new(params, 1)).unwrap();
//!
//! let mut reporter = ConsoleReporter::new(Vec::new(), params);
//! let summary = cluster.run(&mut reporter).unwrap();
//!
//! let text = String::from_utf8(reporter.into_inner()).unwrap();
//! assert!(text.starts_with("time = 0\n0 9 0 0 0\n"));
//! assert_eq!(summary.field.get(1, 1), 4.75);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `caldera-core` | Ranks, tags, run parameters, error taxonomy |
//! | [`grid`] | `caldera-grid` | Two-phase field storage and snapshots |
//! | [`space`] | `caldera-space` | Row partitioning and neighbours |
//! | [`comm`] | `caldera-comm` | Transport trait and the in-process channel mesh |
//! | [`kernel`] | `caldera-kernel` | Boundary rules and the forward-Euler stencil |
//! | [`engine`] | `caldera-engine` | Worker loop, halo exchange, gather, launcher |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, parameters and errors (`caldera-core`).
pub use caldera_core as types;

/// Two-phase field storage (`caldera-grid`).
///
/// [`grid::HeatField`] holds both phases of a worker's grid;
/// [`grid::Snapshot`] is the owned copy the root assembles each step.
pub use caldera_grid as grid;

/// Domain decomposition (`caldera-space`).
pub use caldera_space as space;

/// Blocking point-to-point transport (`caldera-comm`).
///
/// Implement [`comm::Transport`] to run the engine over something other
/// than in-process channels.
pub use caldera_comm as comm;

/// Per-worker numerics (`caldera-kernel`).
pub use caldera_kernel as kernel;

/// The distributed timestep loop (`caldera-engine`).
///
/// [`engine::Cluster`] launches a worker group; [`engine::StepObserver`] is
/// the hook for consuming snapshots.
pub use caldera_engine as engine;

/// Common imports for typical Caldera usage.
///
/// ```rust
/// use caldera::prelude::*;
/// ```
pub mod prelude {
    // Parameters and errors
    pub use caldera_core::{ConfigError, Physics, Rank, RunError, SimParams, TransportError};

    // Grid
    pub use caldera_grid::{HeatField, Phase, Snapshot};

    // Space
    pub use caldera_space::{OwnedRange, Partition};

    // Transport
    pub use caldera_comm::{ChannelMesh, Transport};

    // Engine
    pub use caldera_engine::{
        Cluster, ConsoleReporter, NullObserver, RunConfig, RunSummary, StepObserver,
    };
}
