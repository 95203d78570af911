//! Halo exchange between row neighbours.
//!
//! Each worker sends its first owned row to its left neighbour and its last
//! owned row to its right neighbour, and receives the rows just outside its
//! range in return. Sends block until the peer receives, so the order of
//! operations decides whether the group can make progress. The rule here is
//! parity based:
//!
//! ```text
//! even rank: send right, send left, recv right, recv left
//! odd rank:  recv right, recv left, send right, send left
//! ```
//!
//! Every send of an even rank meets a receive of an odd neighbour that is
//! already waiting, or will be once that neighbour's own right-hand
//! exchange completes. The chain unwinds from the last rank, so no cycle of
//! blocked sends can form for any group size.

use smallvec::SmallVec;

use caldera_comm::{Payload, Transport};
use caldera_core::{Rank, RunError, Tag, TransportError};
use caldera_grid::{HeatField, Phase};
use caldera_space::{neighbour::neighbours, Neighbour, OwnedRange, Side};

/// One blocking halo operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaloOp {
    /// Send the owned row bordering this neighbour.
    Send(Neighbour),
    /// Receive the neighbour's bordering row into the halo row.
    Recv(Neighbour),
}

/// The ordered halo operations for `rank` in a group of `world_size`.
pub fn exchange_order(rank: Rank, world_size: usize) -> SmallVec<[HaloOp; 4]> {
    let peers = neighbours(rank, world_size);
    let sends = peers.iter().copied().map(HaloOp::Send);
    let recvs = peers.iter().copied().map(HaloOp::Recv);
    if rank.is_even() {
        sends.chain(recvs).collect()
    } else {
        recvs.chain(sends).collect()
    }
}

/// Exchange halo rows of `phase` with both neighbours.
///
/// Received rows land in rows `end + 1` (from the right) and `start - 1`
/// (from the left). A row of the wrong length or any transport failure
/// aborts with [`RunError::Exchange`].
pub fn exchange<T: Transport + ?Sized>(
    transport: &T,
    field: &mut HeatField,
    phase: Phase,
    range: OwnedRange,
    step: u64,
) -> Result<(), RunError> {
    let rank = transport.rank();
    for op in exchange_order(rank, transport.world_size()) {
        apply(transport, field, phase, range, op).map_err(|source| RunError::Exchange {
            rank,
            step,
            source,
        })?;
    }
    Ok(())
}

fn apply<T: Transport + ?Sized>(
    transport: &T,
    field: &mut HeatField,
    phase: Phase,
    range: OwnedRange,
    op: HaloOp,
) -> Result<(), TransportError> {
    match op {
        HaloOp::Send(peer) => {
            let x = match peer.side {
                Side::Right => range.end,
                Side::Left => range.start,
            };
            let row = field.row(phase, x).to_vec();
            transport.send(peer.rank, Tag::Halo, Payload::Values(row))
        }
        HaloOp::Recv(peer) => {
            let x = match peer.side {
                Side::Right => range.end + 1,
                Side::Left => range.start - 1,
            };
            let row = transport.recv_values(peer.rank, Tag::Halo, field.size())?;
            field.row_mut(phase, x).copy_from_slice(&row);
            Ok(())
        }
    }
}
