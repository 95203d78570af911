//! Messages exchanged between workers.

/// The body of a point-to-point message.
///
/// Halo traffic only ever carries [`Payload::Values`]. Gather traffic is a
/// two-round-trip conversation between the root and one worker:
///
/// ```text
/// root ── RangeRequest ──────────▶ worker
/// root ◀───────── Range{start,end} worker
/// root ── RowsRequest{len} ──────▶ worker
/// root ◀──────────── Values(rows)  worker
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// Root asks a worker for its owned range.
    RangeRequest,
    /// A worker's inclusive owned range.
    Range {
        /// First owned row.
        start: usize,
        /// Last owned row (inclusive).
        end: usize,
    },
    /// Root asks a worker for its owned rows, announcing the expected length.
    RowsRequest {
        /// Number of values the root will accept.
        len: usize,
    },
    /// A row or a row-major block of rows.
    Values(Vec<f64>),
}

impl Payload {
    /// Short name of the payload kind, used in protocol error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RangeRequest => "range request",
            Self::Range { .. } => "range",
            Self::RowsRequest { .. } => "rows request",
            Self::Values(_) => "values",
        }
    }
}
