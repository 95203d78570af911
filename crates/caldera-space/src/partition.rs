//! Contiguous row partitioning of the grid across a worker group.

use std::ops::Range;

use caldera_core::{ConfigError, Rank};

/// The inclusive row range `[start, end]` a worker owns.
///
/// Immutable once assigned. Rows `start - 1` and `end + 1`, where they
/// exist, are the worker's halo rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OwnedRange {
    /// First owned row.
    pub start: usize,
    /// Last owned row (inclusive).
    pub end: usize,
}

impl OwnedRange {
    /// Number of owned rows. Always at least one.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always `false`: a partition never assigns an empty range.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether row `x` is owned.
    pub fn contains(&self, x: usize) -> bool {
        self.start <= x && x <= self.end
    }

    /// Owned rows as a half-open range.
    pub fn rows(&self) -> Range<usize> {
        self.start..self.end + 1
    }

    /// Rows held in local storage: the owned rows plus existing halo rows.
    pub fn held(&self, size: usize) -> Range<usize> {
        self.start.saturating_sub(1)..(self.end + 2).min(size)
    }

    /// Owned rows the stencil updates: `[max(start, 1), min(end, size-2)]`.
    ///
    /// The global edge rows `0` and `size - 1` are excluded; their values
    /// come from the boundary rules only. Empty for grids below 3 rows.
    pub fn interior(&self, size: usize) -> Range<usize> {
        if size < 3 {
            return 0..0;
        }
        let lo = self.start.max(1);
        let hi = (self.end + 1).min(size - 1);
        lo..hi.max(lo)
    }

    /// The part of `band` that falls inside the owned rows.
    pub fn intersect(&self, band: Range<usize>) -> Range<usize> {
        let lo = band.start.max(self.start);
        let hi = band.end.min(self.end + 1);
        lo..hi.max(lo)
    }
}

/// Assignment of row ranges to every rank of a worker group.
///
/// Rank `r` owns `[slice * r, slice * r + slice - 1]` with
/// `slice = size / workers`; the last rank's range is stretched to
/// `size - 1` to absorb the remainder.
///
/// # Examples
///
/// ```
/// use caldera_core::Rank;
/// use caldera_space::Partition;
///
/// let p = Partition::new(10, 3).unwrap();
/// assert_eq!(p.range(Rank(0)).unwrap().rows(), 0..3);
/// assert_eq!(p.range(Rank(2)).unwrap().rows(), 6..10);
/// assert_eq!(p.owner_of(7), Some(Rank(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    size: usize,
    ranges: Vec<OwnedRange>,
}

impl Partition {
    /// Partition `size` rows across `workers` ranks.
    ///
    /// Returns `Err(ConfigError::NoWorkers)` for an empty group,
    /// `Err(ConfigError::EmptyGrid)` for a zero-size grid, and
    /// `Err(ConfigError::TooManyWorkers)` when some rank would own no rows.
    pub fn new(size: usize, workers: usize) -> Result<Self, ConfigError> {
        if workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if workers > size {
            return Err(ConfigError::TooManyWorkers { workers, size });
        }
        let slice = size / workers;
        let ranges = (0..workers)
            .map(|rank| {
                let start = slice * rank;
                let end = if rank + 1 == workers {
                    size - 1
                } else {
                    start + slice - 1
                };
                OwnedRange { start, end }
            })
            .collect();
        Ok(Self { size, ranges })
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of ranks.
    pub fn worker_count(&self) -> usize {
        self.ranges.len()
    }

    /// Rows per rank before the remainder is added to the last rank.
    pub fn slice(&self) -> usize {
        self.size / self.ranges.len()
    }

    /// The range owned by `rank`, or `None` if the rank is not in the group.
    pub fn range(&self, rank: Rank) -> Option<OwnedRange> {
        self.ranges.get(rank.index()).copied()
    }

    /// The rank owning row `x`, or `None` if `x` is outside the grid.
    pub fn owner_of(&self, x: usize) -> Option<Rank> {
        if x >= self.size {
            return None;
        }
        let last = self.ranges.len() - 1;
        Some(Rank((x / self.slice()).min(last)))
    }

    /// The rank owning row 0.
    pub fn left_edge_owner(&self) -> Rank {
        Rank::ROOT
    }

    /// The rank owning row `size - 1`.
    pub fn right_edge_owner(&self) -> Rank {
        Rank(self.ranges.len() - 1)
    }

    /// `(rank, range)` pairs in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, OwnedRange)> + '_ {
        self.ranges
            .iter()
            .enumerate()
            .map(|(i, &range)| (Rank(i), range))
    }
}
