//! The transport abstraction the engine communicates through.

use caldera_core::{Rank, Tag, TransportError};

use crate::payload::Payload;

/// Blocking point-to-point messaging within a fixed worker group.
///
/// This is the only capability the engine needs from its process group:
/// its own rank, the group size, and synchronous send/receive keyed by a
/// peer rank and a [`Tag`]. A `send` does not return until the peer has
/// posted the matching `recv`, and a `recv` blocks until the message
/// arrives. There is no timeout.
///
/// Implementations must keep each `(peer, tag)` pair an independent
/// channel so halo and gather traffic never interleave.
pub trait Transport: Send {
    /// This worker's rank.
    fn rank(&self) -> Rank;

    /// Number of workers in the group.
    fn world_size(&self) -> usize;

    /// Send `payload` to `dest` on channel `tag`, blocking until received.
    fn send(&self, dest: Rank, tag: Tag, payload: Payload) -> Result<(), TransportError>;

    /// Receive the next message from `source` on channel `tag`.
    fn recv(&self, source: Rank, tag: Tag) -> Result<Payload, TransportError>;

    /// Receive a [`Payload::Values`] of exactly `len` values.
    fn recv_values(&self, source: Rank, tag: Tag, len: usize) -> Result<Vec<f64>, TransportError> {
        match self.recv(source, tag)? {
            Payload::Values(values) if values.len() == len => Ok(values),
            Payload::Values(values) => Err(TransportError::LengthMismatch {
                peer: source,
                expected: len,
                found: values.len(),
            }),
            other => Err(unexpected(source, tag, "values", &other)),
        }
    }

    /// Receive a [`Payload::Range`] as `(start, end)`.
    fn recv_range(&self, source: Rank, tag: Tag) -> Result<(usize, usize), TransportError> {
        match self.recv(source, tag)? {
            Payload::Range { start, end } => Ok((start, end)),
            other => Err(unexpected(source, tag, "range", &other)),
        }
    }
}

/// Build the protocol error for a payload of the wrong kind.
pub fn unexpected(peer: Rank, tag: Tag, expected: &'static str, found: &Payload) -> TransportError {
    TransportError::UnexpectedPayload {
        peer,
        tag,
        expected,
        found: found.kind(),
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn rank(&self) -> Rank {
        (**self).rank()
    }

    fn world_size(&self) -> usize {
        (**self).world_size()
    }

    fn send(&self, dest: Rank, tag: Tag, payload: Payload) -> Result<(), TransportError> {
        (**self).send(dest, tag, payload)
    }

    fn recv(&self, source: Rank, tag: Tag) -> Result<Payload, TransportError> {
        (**self).recv(source, tag)
    }
}
