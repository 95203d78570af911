//! Root-side assembly of the full grid.
//!
//! The root visits every other rank in increasing order and runs a two
//! round-trip conversation on [`Tag::Gather`]: it asks for the rank's owned
//! range, then for that many rows, and copies the block into its own field.
//! Every non-root rank answers exactly one such conversation per step with
//! [`respond`].

use caldera_comm::{transport::unexpected, Payload, Transport};
use caldera_core::{Rank, RunError, Tag, TransportError};
use caldera_grid::{HeatField, Phase};
use caldera_space::OwnedRange;

/// Collect every other rank's owned rows of `phase` into `field`.
///
/// Called on the root only. After it returns, `field` holds the assembled
/// grid for `phase`.
pub fn collect<T: Transport + ?Sized>(
    transport: &T,
    field: &mut HeatField,
    phase: Phase,
    step: u64,
) -> Result<(), RunError> {
    for peer in (1..transport.world_size()).map(Rank) {
        collect_from(transport, field, phase, peer).map_err(|source| RunError::Gather {
            rank: transport.rank(),
            step,
            source,
        })?;
    }
    Ok(())
}

fn collect_from<T: Transport + ?Sized>(
    transport: &T,
    field: &mut HeatField,
    phase: Phase,
    peer: Rank,
) -> Result<(), TransportError> {
    let size = field.size();
    transport.send(peer, Tag::Gather, Payload::RangeRequest)?;
    let (start, end) = transport.recv_range(peer, Tag::Gather)?;
    if start > end || end >= size {
        return Err(TransportError::UnexpectedPayload {
            peer,
            tag: Tag::Gather,
            expected: "range inside the grid",
            found: "range",
        });
    }

    let len = size * (end - start + 1);
    transport.send(peer, Tag::Gather, Payload::RowsRequest { len })?;
    let values = transport.recv_values(peer, Tag::Gather, len)?;
    field
        .rows_mut(phase, start..end + 1)
        .copy_from_slice(&values);
    Ok(())
}

/// Answer the root's gather for this step with the owned rows of `phase`.
pub fn respond<T: Transport + ?Sized>(
    transport: &T,
    field: &HeatField,
    phase: Phase,
    range: OwnedRange,
    step: u64,
) -> Result<(), RunError> {
    respond_inner(transport, field, phase, range).map_err(|source| RunError::Gather {
        rank: transport.rank(),
        step,
        source,
    })
}

fn respond_inner<T: Transport + ?Sized>(
    transport: &T,
    field: &HeatField,
    phase: Phase,
    range: OwnedRange,
) -> Result<(), TransportError> {
    let root = Rank::ROOT;
    match transport.recv(root, Tag::Gather)? {
        Payload::RangeRequest => {}
        other => return Err(unexpected(root, Tag::Gather, "range request", &other)),
    }
    transport.send(
        root,
        Tag::Gather,
        Payload::Range {
            start: range.start,
            end: range.end,
        },
    )?;

    let expected = range.len() * field.size();
    match transport.recv(root, Tag::Gather)? {
        Payload::RowsRequest { len } if len == expected => {}
        Payload::RowsRequest { len } => {
            return Err(TransportError::LengthMismatch {
                peer: root,
                expected,
                found: len,
            })
        }
        other => return Err(unexpected(root, Tag::Gather, "rows request", &other)),
    }
    let rows = field.rows(phase, range.rows()).to_vec();
    transport.send(root, Tag::Gather, Payload::Values(rows))
}
