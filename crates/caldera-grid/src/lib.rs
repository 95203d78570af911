//! Double-buffered temperature storage for Caldera simulations.
//!
//! # Architecture
//!
//! ```text
//! HeatField
//! ├── phase 0: Vec<f64>  ←── current on even steps, next on odd steps
//! └── phase 1: Vec<f64>  ←── current on odd steps, next on even steps
//! ```
//!
//! Both phases are stored x-major (`x * size + y`), so the rows a worker
//! owns form one contiguous slice. That slice is what travels during a
//! gather, and a single row is what travels during a halo exchange.
//!
//! A worker allocates the full `size × size` domain but only populates the
//! rows it owns plus one halo row on each side. The root additionally
//! fills every other row during a gather and copies the assembled phase
//! into an owned [`Snapshot`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod field;
pub mod snapshot;

pub use field::{HeatField, Phase};
pub use snapshot::Snapshot;
