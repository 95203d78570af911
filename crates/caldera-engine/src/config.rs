//! Run configuration and validation.
//!
//! [`RunConfig`] is the single input to [`Cluster::new`](crate::Cluster::new).
//! [`validate()`](RunConfig::validate) checks every startup invariant before
//! any worker is spawned, so a rejected configuration never leaves threads
//! behind.

use caldera_core::{ConfigError, Physics, Rank, SimParams};
use caldera_kernel::ForwardEuler;
use caldera_space::{OwnedRange, Partition};

// ── RunConfig ──────────────────────────────────────────────────────

/// Complete configuration for one simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunConfig {
    /// Grid size, step count, heating duration and report cadence.
    pub params: SimParams,
    /// Physical constants the diffusion coefficient is derived from.
    pub physics: Physics,
    /// Number of workers in the group.
    pub workers: usize,
}

impl RunConfig {
    /// Configuration with default physics.
    pub fn new(params: SimParams, workers: usize) -> Self {
        Self {
            params,
            physics: Physics::default(),
            workers,
        }
    }

    /// Validate all startup invariants.
    ///
    /// Checks, in order: the worker count, the grid size, that every worker
    /// gets at least one row, and the physical constants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.partition()?;
        self.params.validate()?;
        self.physics.validate()
    }

    /// Assign row ranges to every rank.
    pub fn partition(&self) -> Result<Partition, ConfigError> {
        Partition::new(self.params.size, self.workers)
    }

    /// Per-worker configuration for `rank` owning `range`.
    pub fn worker(&self, rank: Rank, range: OwnedRange) -> WorkerConfig {
        WorkerConfig {
            rank,
            range,
            params: self.params,
            stencil: ForwardEuler::new(&self.physics),
        }
    }
}

// ── WorkerConfig ───────────────────────────────────────────────────

/// Everything one worker needs, passed explicitly into its loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkerConfig {
    /// This worker's rank.
    pub rank: Rank,
    /// Rows this worker owns.
    pub range: OwnedRange,
    /// Run parameters, identical on every worker.
    pub params: SimParams,
    /// The diffusion stencil with its coefficient.
    pub stencil: ForwardEuler,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(size: usize) -> SimParams {
        SimParams {
            size,
            max_time: 10,
            heat_time: 5,
            interval: 1,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(RunConfig::new(params(12), 4).validate().is_ok());
        assert!(RunConfig::new(params(12), 5).validate().is_ok());
        assert!(RunConfig::new(params(1), 1).validate().is_ok());
    }

    #[test]
    fn zero_workers_rejected() {
        match RunConfig::new(params(12), 0).validate() {
            Err(ConfigError::NoWorkers) => {}
            other => panic!("expected NoWorkers, got {other:?}"),
        }
    }

    #[test]
    fn zero_size_rejected() {
        match RunConfig::new(params(0), 1).validate() {
            Err(ConfigError::EmptyGrid) => {}
            other => panic!("expected EmptyGrid, got {other:?}"),
        }
    }

    #[test]
    fn more_workers_than_rows_rejected() {
        match RunConfig::new(params(3), 4).validate() {
            Err(ConfigError::TooManyWorkers {
                workers: 4,
                size: 3,
            }) => {}
            other => panic!("expected TooManyWorkers, got {other:?}"),
        }
    }

    #[test]
    fn invalid_physics_rejected() {
        let mut cfg = RunConfig::new(params(8), 2);
        cfg.physics.dt = f64::INFINITY;
        match cfg.validate() {
            Err(ConfigError::InvalidPhysics { name: "dt", .. }) => {}
            other => panic!("expected InvalidPhysics(dt), got {other:?}"),
        }
    }

    #[test]
    fn worker_config_carries_coefficient() {
        let mut cfg = RunConfig::new(params(8), 2);
        cfg.physics.a = 0.5;
        let range = OwnedRange { start: 4, end: 7 };
        let wc = cfg.worker(Rank(1), range);
        assert_eq!(wc.rank, Rank(1));
        assert_eq!(wc.range, range);
        assert_eq!(wc.stencil.coefficient(), 0.125);
    }
}
