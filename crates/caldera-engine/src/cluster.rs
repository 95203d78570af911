//! Thread-per-rank launcher for a whole worker group.
//!
//! [`Cluster`] validates a [`RunConfig`], spawns one named thread per rank
//! (`caldera-rank-<r>`), joins them all and folds their outcomes into a
//! [`RunSummary`]. Threads are scoped, so the root's observer can be
//! borrowed from the caller for the duration of the run.
//!
//! # Failure
//!
//! A failing worker returns its error and drops its transport. Peers
//! blocked on it then fail with a disconnect, and so on until every thread
//! has exited. The error returned is the first one that is not merely such
//! an echo; the echoes are logged at `warn`.

use std::thread;
use std::time::{Duration, Instant};

use caldera_comm::{ChannelMesh, Transport};
use caldera_core::{ConfigError, Rank, RunError};
use caldera_grid::Snapshot;
use caldera_space::Partition;

use crate::config::RunConfig;
use crate::report::StepObserver;
use crate::worker::{Worker, WorkerOutcome};

/// Result of a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Timesteps executed.
    pub steps: u64,
    /// Wall time from first spawn to last join.
    pub elapsed: Duration,
    /// Steps that fell on the report cadence.
    pub snapshots_emitted: u64,
    /// The field after the last step.
    pub field: Snapshot,
}

/// A validated worker group, ready to run.
#[derive(Debug)]
pub struct Cluster {
    config: RunConfig,
    partition: Partition,
}

impl Cluster {
    /// Validate `config` and partition the grid.
    pub fn new(config: RunConfig) -> Result<Self, RunError> {
        config.validate()?;
        let partition = config.partition()?;
        Ok(Self { config, partition })
    }

    /// The run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// The row assignment.
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Run over an in-process [`ChannelMesh`].
    pub fn run<O: StepObserver + Send>(&self, observer: &mut O) -> Result<RunSummary, RunError> {
        self.run_with(ChannelMesh::build(self.config.workers), observer)
    }

    /// Run with caller-supplied transports, one per rank in rank order.
    pub fn run_with<T, O>(&self, transports: Vec<T>, observer: &mut O) -> Result<RunSummary, RunError>
    where
        T: Transport,
        O: StepObserver + Send,
    {
        let RunConfig {
            params, workers, ..
        } = self.config;
        if transports.len() != workers {
            return Err(ConfigError::TransportCount {
                transports: transports.len(),
                workers,
            }
            .into());
        }
        tracing::info!(
            size = params.size,
            workers,
            max_time = params.max_time,
            heat_time = params.heat_time,
            interval = params.interval,
            "run starting"
        );

        let start = Instant::now();
        let results = self.spawn_and_join(transports, &mut *observer);
        let elapsed = start.elapsed();

        let root = pick_result(results)?;
        let field = root.field.ok_or(RunError::WorkerPanicked { rank: Rank::ROOT })?;
        observer.finish(elapsed).map_err(|e| RunError::Report {
            step: params.max_time,
            reason: e.to_string(),
        })?;

        let snapshots_emitted = (0..params.max_time)
            .filter(|&t| params.should_report(t))
            .count() as u64;
        tracing::info!(
            steps = root.steps,
            elapsed_ms = elapsed.as_millis() as u64,
            snapshots_emitted,
            "run finished"
        );
        Ok(RunSummary {
            steps: root.steps,
            elapsed,
            snapshots_emitted,
            field,
        })
    }

    fn spawn_and_join<T, O>(
        &self,
        transports: Vec<T>,
        observer: &mut O,
    ) -> Vec<(Rank, Result<WorkerOutcome, RunError>)>
    where
        T: Transport,
        O: StepObserver + Send,
    {
        thread::scope(|s| {
            let mut observer = Some(observer);
            let mut handles = Vec::with_capacity(transports.len());
            let mut results = Vec::new();

            for ((rank, range), transport) in self.partition.iter().zip(transports) {
                let worker = Worker::new(self.config.worker(rank, range), transport);
                let obs = if rank.is_root() { observer.take() } else { None };
                let spawned = thread::Builder::new()
                    .name(format!("caldera-rank-{rank}"))
                    .spawn_scoped(s, move || {
                        worker.run(obs.map(|o| o as &mut dyn StepObserver))
                    });
                match spawned {
                    Ok(handle) => handles.push((rank, handle)),
                    Err(e) => {
                        // Remaining transports drop with the iterator, so
                        // spawned peers see disconnects and exit.
                        results.push((
                            rank,
                            Err(RunError::ThreadSpawnFailed {
                                reason: format!("rank {rank}: {e}"),
                            }),
                        ));
                        break;
                    }
                }
            }

            for (rank, handle) in handles {
                let result = handle
                    .join()
                    .unwrap_or(Err(RunError::WorkerPanicked { rank }));
                results.push((rank, result));
            }
            results.sort_by_key(|(rank, _)| *rank);
            results
        })
    }
}

/// The root's outcome, or the most informative error of the group.
fn pick_result(
    results: Vec<(Rank, Result<WorkerOutcome, RunError>)>,
) -> Result<WorkerOutcome, RunError> {
    let mut root = None;
    let mut echo = None;
    let mut cause = None;
    for (rank, result) in results {
        match result {
            Ok(outcome) if rank.is_root() => root = Some(outcome),
            Ok(_) => {}
            Err(e) if e.is_disconnect() => {
                tracing::warn!(%rank, error = %e, "worker aborted after a peer failed");
                if echo.is_none() {
                    echo = Some(e);
                }
            }
            Err(e) => {
                tracing::error!(%rank, error = %e, "worker failed");
                if cause.is_none() {
                    cause = Some(e);
                }
            }
        }
    }
    if let Some(e) = cause.or(echo) {
        return Err(e);
    }
    root.ok_or(RunError::WorkerPanicked { rank: Rank::ROOT })
}
