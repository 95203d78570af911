//! Core types and parameters for the Caldera heat diffusion engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the identifiers (ranks, message tags), the run parameters and
//! physical constants, and the error taxonomy shared by the grid,
//! transport, and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod params;

pub use error::{ConfigError, RunError, TransportError};
pub use id::{Rank, Tag};
pub use params::{Physics, SimParams, HEAT_SOURCE_TEMPERATURE};
