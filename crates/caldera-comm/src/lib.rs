//! Blocking point-to-point transport for Caldera worker groups.
//!
//! The engine talks to its peers only through the [`Transport`] trait:
//! rank, group size, and synchronous `send`/`recv` keyed by peer and
//! [`Tag`](caldera_core::Tag). [`ChannelMesh`] provides the in-process
//! implementation used by the thread-per-rank launcher, built on
//! zero-capacity `crossbeam-channel` links.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod mesh;
pub mod payload;
pub mod transport;

pub use mesh::{ChannelEndpoint, ChannelMesh};
pub use payload::Payload;
pub use transport::Transport;
