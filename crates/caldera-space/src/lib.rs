//! Row-sliced domain decomposition for Caldera simulations.
//!
//! A square grid of `size` rows is split into contiguous, disjoint row
//! ranges, one per worker. [`Partition`] assigns the ranges and answers
//! ownership queries; [`Neighbour`] describes the row neighbours a worker
//! exchanges halo rows with.
//!
//! # Layout
//!
//! ```text
//! rank 0 ── rows [0,        slice-1]      left-edge owner
//! rank 1 ── rows [slice,    2*slice-1]
//! ...
//! rank n-1 ─ rows [(n-1)*slice, size-1]  right-edge owner, absorbs size % n
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod neighbour;
pub mod partition;

pub use neighbour::{Neighbour, Side};
pub use partition::{OwnedRange, Partition};
