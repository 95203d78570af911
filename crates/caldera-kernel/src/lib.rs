//! Per-worker numerics for Caldera heat diffusion.
//!
//! Everything here operates on a worker's own [`HeatField`] and owned row
//! range; no communication happens in this crate.
//!
//! # Order within a step
//!
//! 1. [`boundary::enforce`] on the current phase, owned rows only
//! 2. halo exchange (engine)
//! 3. [`boundary::refresh_edges`] on the current phase
//! 4. [`ForwardEuler::step`] from the current phase into the next
//!
//! [`HeatField`]: caldera_grid::HeatField

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod boundary;
pub mod stencil;

pub use boundary::{enforce, refresh_edges, HeatSource};
pub use stencil::ForwardEuler;
