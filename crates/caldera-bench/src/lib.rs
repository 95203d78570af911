//! Benchmark profiles for the Caldera heat diffusion engine.
//!
//! - [`reference_profile`]: 100x100 grid, 200 steps, heat on for half
//! - [`stress_profile`]: 316x316 grid (~100K cells), 50 steps
//!
//! Both disable snapshot printing so runs measure the step loop, halo
//! exchange and per-step gather only.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use caldera_core::SimParams;
use caldera_engine::RunConfig;

/// 100x100 grid (10K cells) over `workers` ranks.
pub fn reference_profile(workers: usize) -> RunConfig {
    RunConfig::new(
        SimParams {
            size: 100,
            max_time: 200,
            heat_time: 100,
            interval: 0,
        },
        workers,
    )
}

/// 316x316 grid (~100K cells) over `workers` ranks.
pub fn stress_profile(workers: usize) -> RunConfig {
    RunConfig::new(
        SimParams {
            size: 316,
            max_time: 50,
            heat_time: 50,
            interval: 0,
        },
        workers,
    )
}
