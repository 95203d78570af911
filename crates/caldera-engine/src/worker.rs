//! The per-rank timestep loop.
//!
//! Every rank runs the same loop over its own [`HeatField`]:
//!
//! 1. boundary rules on the owned rows of the current phase
//! 2. halo exchange with both neighbours
//! 3. edge refresh of any global edge row held locally
//! 4. gather: the root assembles the grid and notifies its observer,
//!    every other rank answers the root
//! 5. stencil from the current phase into the next
//!
//! After the last step the phase the final stencil wrote is gathered once
//! more so the root can return the final field.

use caldera_comm::Transport;
use caldera_core::RunError;
use caldera_grid::{HeatField, Phase, Snapshot};
use caldera_kernel::{boundary, HeatSource};

use crate::config::WorkerConfig;
use crate::gather;
use crate::halo;
use crate::report::StepObserver;

/// What a worker hands back when its loop completes.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkerOutcome {
    /// Steps executed.
    pub steps: u64,
    /// The assembled final field. `Some` on the root only.
    pub field: Option<Snapshot>,
}

/// One rank of the group: its configuration, transport and local field.
pub struct Worker<T> {
    config: WorkerConfig,
    transport: T,
    field: HeatField,
}

impl<T: Transport> Worker<T> {
    /// A worker with a zero-initialized field.
    pub fn new(config: WorkerConfig, transport: T) -> Self {
        let field = HeatField::new(config.params.size);
        Self {
            config,
            transport,
            field,
        }
    }

    /// This worker's configuration.
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Run all `max_time` steps.
    ///
    /// `observer` is consulted on the root only. The transport is dropped
    /// when this returns, so peers blocked on this worker fail with a
    /// disconnect rather than wait forever.
    pub fn run(
        mut self,
        mut observer: Option<&mut dyn StepObserver>,
    ) -> Result<WorkerOutcome, RunError> {
        let WorkerConfig { rank, range, params, .. } = self.config;
        tracing::debug!(%rank, start = range.start, end = range.end, "worker starting");

        for t in 0..params.max_time {
            let observer = observer.as_mut().map(|o| &mut **o as &mut dyn StepObserver);
            self.step(t, observer)?;
        }

        let last = Phase::of_step(params.max_time);
        self.sync(last, params.max_time)?;
        let field = rank
            .is_root()
            .then(|| self.field.snapshot(last, params.max_time));
        tracing::debug!(%rank, steps = params.max_time, "worker finished");
        Ok(WorkerOutcome {
            steps: params.max_time,
            field,
        })
    }

    fn step(&mut self, t: u64, observer: Option<&mut dyn StepObserver>) -> Result<(), RunError> {
        let WorkerConfig {
            range,
            params,
            stencil,
            ..
        } = self.config;
        let phase = Phase::of_step(t);
        let source = HeatSource::at_step(&params, t);
        tracing::trace!(rank = %self.config.rank, t, ?phase, heating = source.active, "step");

        boundary::enforce(&mut self.field, phase, range, &source);
        halo::exchange(&self.transport, &mut self.field, phase, range, t)?;
        boundary::refresh_edges(&mut self.field, phase, range, &source);

        self.sync(phase, t)?;
        if let Some(observer) = observer {
            observer
                .on_step(&self.field.snapshot(phase, t))
                .map_err(|e| RunError::Report {
                    step: t,
                    reason: e.to_string(),
                })?;
        }

        stencil.step(&mut self.field, phase, range.interior(params.size));
        Ok(())
    }

    /// Gather `phase` on the root, or answer the root's gather.
    fn sync(&mut self, phase: Phase, step: u64) -> Result<(), RunError> {
        let WorkerConfig { rank, range, .. } = self.config;
        if rank.is_root() {
            gather::collect(&self.transport, &mut self.field, phase, step)
        } else {
            gather::respond(&self.transport, &self.field, phase, range, step)
        }
    }
}
