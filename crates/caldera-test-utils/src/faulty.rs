//! Fault injection at the transport seam.
//!
//! [`FaultyTransport`] wraps a working transport and corrupts exactly one
//! outgoing message: the `nth` send (zero-based) on a given tag.

use std::cell::Cell;

use caldera_comm::{Payload, Transport};
use caldera_core::{Rank, Tag, TransportError};

/// How the selected message is corrupted.
#[derive(Clone, Debug, PartialEq)]
pub enum Fault {
    /// Drop the last value of a [`Payload::Values`].
    Truncate,
    /// Send this payload instead.
    Replace(Payload),
}

/// A transport that corrupts one outgoing message.
pub struct FaultyTransport<T> {
    inner: T,
    tag: Tag,
    nth: usize,
    fault: Fault,
    sent: Cell<usize>,
}

impl<T: Transport> FaultyTransport<T> {
    pub fn new(inner: T, tag: Tag, nth: usize, fault: Fault) -> Self {
        Self {
            inner,
            tag,
            nth,
            fault,
            sent: Cell::new(0),
        }
    }
}

impl<T: Transport> Transport for FaultyTransport<T> {
    fn rank(&self) -> Rank {
        self.inner.rank()
    }

    fn world_size(&self) -> usize {
        self.inner.world_size()
    }

    fn send(&self, dest: Rank, tag: Tag, payload: Payload) -> Result<(), TransportError> {
        if tag != self.tag {
            return self.inner.send(dest, tag, payload);
        }
        let n = self.sent.get();
        self.sent.set(n + 1);
        if n != self.nth {
            return self.inner.send(dest, tag, payload);
        }
        let corrupted = match (&self.fault, payload) {
            (Fault::Truncate, Payload::Values(mut values)) => {
                values.pop();
                Payload::Values(values)
            }
            (Fault::Truncate, other) => other,
            (Fault::Replace(replacement), _) => replacement.clone(),
        };
        self.inner.send(dest, tag, corrupted)
    }

    fn recv(&self, source: Rank, tag: Tag) -> Result<Payload, TransportError> {
        self.inner.recv(source, tag)
    }
}
