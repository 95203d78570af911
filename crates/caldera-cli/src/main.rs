//! Caldera command-line runner.
//!
//! Runs a 2D heat diffusion simulation over a group of worker threads and
//! prints the grid at the requested cadence.
//!
//! # Usage
//!
//! ```bash
//! # 100x100 grid, 1000 steps, heat on for 500 steps, print every 100
//! caldera 100 1000 500 100
//!
//! # Same run split across 4 workers
//! caldera 100 1000 500 100 --workers 4
//!
//! # Custom physics (r = a * dt / dd^2)
//! caldera 50 200 100 0 --a 0.5 --dd 1.5
//! ```
//!
//! Snapshots and the elapsed time go to stdout; logs go to stderr and are
//! filtered with `RUST_LOG`.

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;

use caldera_core::{Physics, SimParams};
use caldera_engine::{Cluster, ConsoleReporter, RunConfig};

/// 2D heat diffusion by forward Euler over a fixed worker group
#[derive(Parser, Debug)]
#[command(name = "caldera")]
#[command(version)]
struct Args {
    /// Grid side length (the grid has size x size cells)
    size: usize,

    /// Number of timesteps to simulate
    max_time: u64,

    /// Steps during which the heat source stays on
    heat_time: u64,

    /// Print the grid every `interval` steps (0 disables printing)
    interval: u64,

    /// Number of worker threads
    #[arg(short, long, default_value_t = 1)]
    workers: usize,

    /// Heat speed
    #[arg(long, default_value_t = 1.0)]
    a: f64,

    /// Time quantum
    #[arg(long, default_value_t = 1.0)]
    dt: f64,

    /// Spatial step
    #[arg(long, default_value_t = 2.0)]
    dd: f64,
}

impl Args {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            params: SimParams {
                size: self.size,
                max_time: self.max_time,
                heat_time: self.heat_time,
                interval: self.interval,
            },
            physics: Physics {
                a: self.a,
                dt: self.dt,
                dd: self.dd,
            },
            workers: self.workers,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = args.run_config();
    tracing::debug!(?config, "parsed arguments");

    let cluster = Cluster::new(config).context("invalid run configuration")?;
    let mut reporter = ConsoleReporter::new(BufWriter::new(io::stdout()), config.params);
    let summary = cluster.run(&mut reporter).context("simulation aborted")?;

    tracing::info!(
        steps = summary.steps,
        snapshots = summary.snapshots_emitted,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "done"
    );
    Ok(())
}
