// crates/integral-core/src/build/mod.rs

pub mod naive;
pub mod parallel;
pub mod sequential;

pub mod data_parallel;
pub(crate) mod partition;
pub(crate) mod phases;

use crate::config::{BuildConfig, ParallelStrategy};
use crate::error::Result;
use crate::grid::Grid;
use crate::table::SummedAreaTable;

/// Run the two-phase parallel build on the backend named by `cfg.strategy`.
///
/// Both backends partition identically; only the fork-join primitive differs.
pub fn build_parallel_with(grid: &Grid, cfg: &BuildConfig) -> Result<SummedAreaTable> {
    match cfg.strategy {
        ParallelStrategy::Threads => Ok(parallel::build_parallel(grid, cfg.workers)),
        ParallelStrategy::Rayon => data_parallel::build_rayon(grid, cfg.workers),
    }
}
