//! Row neighbours of a worker in the 1D decomposition.

use caldera_core::Rank;
use smallvec::{smallvec, SmallVec};

/// Which side of a worker's slice a neighbour sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Lower row indices (`rank - 1`).
    Left,
    /// Higher row indices (`rank + 1`).
    Right,
}

/// An adjacent worker and the side it sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Neighbour {
    /// The neighbour's rank.
    pub rank: Rank,
    /// The side of this worker's slice that borders the neighbour.
    pub side: Side,
}

/// Row neighbours of `rank` in a group of `world_size`, right first.
///
/// The order is the order halo rows are sent and received in. Interior
/// ranks have two neighbours, edge ranks one, and a group of one none.
pub fn neighbours(rank: Rank, world_size: usize) -> SmallVec<[Neighbour; 2]> {
    let mut out = smallvec![];
    if rank.0 + 1 < world_size {
        out.push(Neighbour {
            rank: Rank(rank.0 + 1),
            side: Side::Right,
        });
    }
    if rank.0 > 0 && rank.0 < world_size {
        out.push(Neighbour {
            rank: Rank(rank.0 - 1),
            side: Side::Left,
        });
    }
    out
}
