//! Error types for the Caldera engine.
//!
//! Organized by failure category: configuration (fatal at startup),
//! transport (a send or receive failed, or the peer answered with the
//! wrong message), and run (which stage of which step on which rank
//! aborted the simulation).

use std::error::Error;
use std::fmt;

use crate::id::{Rank, Tag};

/// Errors detected while validating a run configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid side length is zero.
    EmptyGrid,
    /// The worker group is empty.
    NoWorkers,
    /// More workers than grid rows: some rank would own no rows.
    TooManyWorkers {
        /// Requested worker count.
        workers: usize,
        /// Grid side length.
        size: usize,
    },
    /// The number of transports handed to a run differs from the worker count.
    TransportCount {
        /// Transports supplied.
        transports: usize,
        /// Configured worker count.
        workers: usize,
    },
    /// A physical constant is unusable.
    InvalidPhysics {
        /// Name of the offending constant.
        name: &'static str,
        /// Description of the problem.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid size must be at least 1"),
            Self::NoWorkers => write!(f, "worker count must be at least 1"),
            Self::TooManyWorkers { workers, size } => {
                write!(
                    f,
                    "{workers} workers cannot partition a grid of {size} rows"
                )
            }
            Self::TransportCount {
                transports,
                workers,
            } => {
                write!(f, "{transports} transports supplied for {workers} workers")
            }
            Self::InvalidPhysics { name, reason } => {
                write!(f, "invalid physics constant '{name}': {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from blocking point-to-point communication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportError {
    /// The peer's endpoint is gone (the worker exited or panicked).
    Disconnected {
        /// The peer on the other end of the channel.
        peer: Rank,
        /// The channel the operation was posted on.
        tag: Tag,
    },
    /// The destination or source rank is not part of the group.
    UnknownPeer {
        /// The requested peer.
        peer: Rank,
        /// Size of the group.
        world_size: usize,
    },
    /// A worker tried to message itself.
    SelfMessage {
        /// The worker's own rank.
        rank: Rank,
    },
    /// The peer sent a different kind of message than the protocol expects.
    UnexpectedPayload {
        /// The sender.
        peer: Rank,
        /// The channel the message arrived on.
        tag: Tag,
        /// The payload kind the protocol expected.
        expected: &'static str,
        /// The payload kind that arrived.
        found: &'static str,
    },
    /// The peer sent a value buffer of the wrong length.
    LengthMismatch {
        /// The sender.
        peer: Rank,
        /// Number of values expected.
        expected: usize,
        /// Number of values received.
        found: usize,
    },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected { peer, tag } => {
                write!(f, "rank {peer} disconnected on the {tag} channel")
            }
            Self::UnknownPeer { peer, world_size } => {
                write!(f, "rank {peer} is outside a group of {world_size}")
            }
            Self::SelfMessage { rank } => write!(f, "rank {rank} cannot message itself"),
            Self::UnexpectedPayload {
                peer,
                tag,
                expected,
                found,
            } => {
                write!(
                    f,
                    "expected {expected} from rank {peer} on the {tag} channel, got {found}"
                )
            }
            Self::LengthMismatch {
                peer,
                expected,
                found,
            } => {
                write!(
                    f,
                    "rank {peer} sent {found} values, expected {expected}"
                )
            }
        }
    }
}

impl Error for TransportError {}

/// Errors that abort a simulation run.
///
/// Every variant names the stage that failed so the user-visible message
/// says whether partitioning, the halo exchange, the gather, or the report
/// went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    /// The configuration was rejected before any worker started.
    Config(ConfigError),
    /// A halo exchange failed.
    Exchange {
        /// The rank whose exchange failed.
        rank: Rank,
        /// The timestep.
        step: u64,
        /// The underlying transport error.
        source: TransportError,
    },
    /// A gather round trip failed.
    Gather {
        /// The rank whose side of the gather failed.
        rank: Rank,
        /// The timestep, or `max_time` for the final gather.
        step: u64,
        /// The underlying transport error.
        source: TransportError,
    },
    /// The root could not emit a report.
    Report {
        /// The timestep being reported.
        step: u64,
        /// Description of the failure.
        reason: String,
    },
    /// A worker thread panicked.
    WorkerPanicked {
        /// The rank of the panicked worker.
        rank: Rank,
    },
    /// A worker thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the failure.
        reason: String,
    },
}

impl RunError {
    /// Whether this error is only the echo of another worker's failure.
    ///
    /// When one worker aborts, its neighbours observe a disconnect. The
    /// group launcher prefers reporting the root cause.
    pub fn is_disconnect(&self) -> bool {
        matches!(
            self,
            Self::Exchange {
                source: TransportError::Disconnected { .. },
                ..
            } | Self::Gather {
                source: TransportError::Disconnected { .. },
                ..
            }
        )
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "partitioning: {e}"),
            Self::Exchange { rank, step, source } => {
                write!(f, "halo exchange on rank {rank} at step {step}: {source}")
            }
            Self::Gather { rank, step, source } => {
                write!(f, "gather on rank {rank} at step {step}: {source}")
            }
            Self::Report { step, reason } => {
                write!(f, "report at step {step}: {reason}")
            }
            Self::WorkerPanicked { rank } => write!(f, "worker {rank} panicked"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Exchange { source, .. } | Self::Gather { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
