//! Strongly-typed identifiers for workers and message channels.

use std::fmt;

/// A worker's fixed identity within the process group.
///
/// Ranks are dense: a group of `n` workers uses `Rank(0)..Rank(n-1)`.
/// `Rank(0)` is the root, which gathers and reports the full grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(pub usize);

impl Rank {
    /// The root rank.
    pub const ROOT: Rank = Rank(0);

    /// Whether this is the root rank.
    pub fn is_root(self) -> bool {
        self.0 == 0
    }

    /// Whether this rank is even. Even ranks send first during halo exchange.
    pub fn is_even(self) -> bool {
        self.0 % 2 == 0
    }

    /// The rank as an index into per-worker tables.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message channel identifier.
///
/// Halo traffic and gather traffic travel on distinct channels so that a
/// worker waiting for a neighbour's boundary row can never consume a
/// gather request, and vice versa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// Boundary rows exchanged between row neighbours.
    Halo,
    /// Range and row-block traffic between the root and every other rank.
    Gather,
}

impl Tag {
    /// Every tag, in channel-construction order.
    pub const ALL: [Tag; 2] = [Tag::Halo, Tag::Gather];
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Halo => write!(f, "halo"),
            Self::Gather => write!(f, "gather"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_rank_zero() {
        assert!(Rank::ROOT.is_root());
        assert!(!Rank(3).is_root());
    }

    #[test]
    fn parity() {
        assert!(Rank(0).is_even());
        assert!(!Rank(1).is_even());
        assert!(Rank(4).is_even());
    }

    #[test]
    fn display() {
        assert_eq!(Rank(7).to_string(), "7");
        assert_eq!(Tag::Halo.to_string(), "halo");
        assert_eq!(Tag::Gather.to_string(), "gather");
    }
}
