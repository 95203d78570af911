//! Run parameters and physical constants.
//!
//! [`SimParams`] carries the four startup parameters of a run (grid size,
//! step count, heating duration, snapshot cadence). [`Physics`] carries the
//! constants from which the diffusion coefficient `r` is derived.

use std::ops::Range;

use crate::error::ConfigError;

/// Temperature written into the heating band while the source is active.
pub const HEAT_SOURCE_TEMPERATURE: f64 = 19.0;

/// Startup parameters of a simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimParams {
    /// Grid side length. The grid has `size * size` cells.
    pub size: usize,
    /// Number of timesteps to simulate.
    pub max_time: u64,
    /// Steps `t < heat_time` apply the heat source.
    pub heat_time: u64,
    /// Snapshot cadence. `0` disables snapshots.
    pub interval: u64,
}

impl SimParams {
    /// Validate the grid parameters.
    ///
    /// `heat_time > max_time` is accepted: the source then stays on for
    /// the whole run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        Ok(())
    }

    /// Whether the heat source is active at step `t`.
    pub fn heating(&self, t: u64) -> bool {
        t < self.heat_time
    }

    /// Whether step `t` emits a snapshot.
    ///
    /// Every `interval`-th step reports, and so does the final step so the
    /// last state is always visible.
    pub fn should_report(&self, t: u64) -> bool {
        self.interval != 0 && (t % self.interval == 0 || t + 1 == self.max_time)
    }

    /// Rows `x` whose bottom cell `[x][0]` is held at the source temperature.
    ///
    /// Evaluated with integer division as `size / 3 .. size / 3 * 2`. When
    /// `size % 3 == 2` this ends one row before `2 * size / 3`; a grid of 5
    /// heats row 1 only.
    pub fn heat_band(&self) -> Range<usize> {
        let third = self.size / 3;
        third..third * 2
    }
}

/// Physical constants of the explicit scheme.
///
/// The diffusion coefficient is `r = a * dt / (dd * dd)`. No stability
/// bound is enforced: values of `r` above `0.25` make the explicit update
/// oscillate and grow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Physics {
    /// Heat speed.
    pub a: f64,
    /// Time quantum.
    pub dt: f64,
    /// Spatial step.
    pub dd: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            a: 1.0,
            dt: 1.0,
            dd: 2.0,
        }
    }
}

impl Physics {
    /// The diffusion coefficient `r = a * dt / (dd * dd)`.
    pub fn coefficient(&self) -> f64 {
        self.a * self.dt / (self.dd * self.dd)
    }

    /// Check that every constant is finite and that `dd` is non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("a", self.a), ("dt", self.dt), ("dd", self.dd)] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidPhysics {
                    name,
                    reason: format!("must be finite, got {value}"),
                });
            }
        }
        if self.dd == 0.0 {
            return Err(ConfigError::InvalidPhysics {
                name: "dd",
                reason: "must be non-zero".to_string(),
            });
        }
        if !self.coefficient().is_finite() {
            return Err(ConfigError::InvalidPhysics {
                name: "r",
                reason: format!("a * dt / (dd * dd) overflows, got {}", self.coefficient()),
            });
        }
        Ok(())
    }
}
