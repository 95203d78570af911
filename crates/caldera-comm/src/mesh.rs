//! In-process transport over rendezvous crossbeam channels.
//!
//! [`ChannelMesh::build`] creates one zero-capacity channel per ordered
//! `(source, destination, tag)` triple and hands each rank a
//! [`ChannelEndpoint`] holding the sending halves of its outgoing links and
//! the receiving halves of its incoming links. A zero-capacity channel has
//! no buffer: `send` blocks until the receiver takes the message, which is
//! exactly the synchronous point-to-point semantics the halo and gather
//! protocols are ordered around.
//!
//! Dropping an endpoint disconnects every link it participates in. A peer
//! blocked on that link wakes up with [`TransportError::Disconnected`]
//! instead of waiting forever, so one failing worker takes the whole group
//! down rather than hanging it.

use crossbeam_channel::{bounded, Receiver, Sender};
use indexmap::IndexMap;

use caldera_core::{Rank, Tag, TransportError};

use crate::payload::Payload;
use crate::transport::Transport;

type Link = (Rank, Tag);

/// Factory for a fully connected group of [`ChannelEndpoint`]s.
pub struct ChannelMesh;

impl ChannelMesh {
    /// Build endpoints for ranks `0..world_size`, in rank order.
    ///
    /// Every ordered pair of distinct ranks is linked on every [`Tag`], so
    /// the mesh holds `world_size * (world_size - 1) * Tag::ALL.len()`
    /// channels.
    pub fn build(world_size: usize) -> Vec<ChannelEndpoint> {
        let mut endpoints: Vec<ChannelEndpoint> = (0..world_size)
            .map(|r| ChannelEndpoint {
                rank: Rank(r),
                world_size,
                outgoing: IndexMap::new(),
                incoming: IndexMap::new(),
            })
            .collect();

        for src in 0..world_size {
            for dst in 0..world_size {
                if src == dst {
                    continue;
                }
                for tag in Tag::ALL {
                    let (tx, rx) = bounded(0);
                    endpoints[src].outgoing.insert((Rank(dst), tag), tx);
                    endpoints[dst].incoming.insert((Rank(src), tag), rx);
                }
            }
        }

        tracing::trace!(world_size, "channel mesh built");
        endpoints
    }
}

/// One rank's view of a [`ChannelMesh`].
///
/// `Send` so it can be moved into the worker thread; each endpoint is used
/// by exactly one worker.
#[derive(Debug)]
pub struct ChannelEndpoint {
    rank: Rank,
    world_size: usize,
    outgoing: IndexMap<Link, Sender<Payload>>,
    incoming: IndexMap<Link, Receiver<Payload>>,
}

impl ChannelEndpoint {
    fn check_peer(&self, peer: Rank) -> Result<(), TransportError> {
        if peer == self.rank {
            return Err(TransportError::SelfMessage { rank: self.rank });
        }
        if peer.index() >= self.world_size {
            return Err(TransportError::UnknownPeer {
                peer,
                world_size: self.world_size,
            });
        }
        Ok(())
    }
}

impl Transport for ChannelEndpoint {
    fn rank(&self) -> Rank {
        self.rank
    }

    fn world_size(&self) -> usize {
        self.world_size
    }

    fn send(&self, dest: Rank, tag: Tag, payload: Payload) -> Result<(), TransportError> {
        self.check_peer(dest)?;
        let tx = self
            .outgoing
            .get(&(dest, tag))
            .ok_or(TransportError::Disconnected { peer: dest, tag })?;
        tx.send(payload)
            .map_err(|_| TransportError::Disconnected { peer: dest, tag })
    }

    fn recv(&self, source: Rank, tag: Tag) -> Result<Payload, TransportError> {
        self.check_peer(source)?;
        let rx = self
            .incoming
            .get(&(source, tag))
            .ok_or(TransportError::Disconnected { peer: source, tag })?;
        rx.recv()
            .map_err(|_| TransportError::Disconnected { peer: source, tag })
    }
}
