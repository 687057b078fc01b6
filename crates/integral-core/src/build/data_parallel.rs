// crates/integral-core/src/build/data_parallel.rs

use log::debug;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::build::partition::{block_len, clamp_workers, column_blocks};
use crate::build::phases::{prefix_columns, prefix_rows};
use crate::error::{Result, SatError};
use crate::grid::Grid;
use crate::table::SummedAreaTable;

/// Same two-phase build as `build_parallel`, run as data-parallel loops on a
/// rayon pool sized to `workers`.
///
/// Blocks are formed up front with the same `ceil(n/t)` sizes, so the split is
/// static. The first `for_each` returning is the barrier between phases.
pub fn build_rayon(grid: &Grid, workers: usize) -> Result<SummedAreaTable> {
    let (w, h) = (grid.width(), grid.height());
    if grid.is_empty() {
        return Ok(SummedAreaTable::empty(w, h));
    }
    let workers = clamp_workers(workers);

    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| SatError::ThreadPool(e.to_string()))?;

    let mut sums = vec![0u64; w * h];
    let rows_per = block_len(h, workers);
    let cols_per = block_len(w, workers);
    debug!(
        "rayon build: {}x{} rows/block={} cols/block={} workers={}",
        w, h, rows_per, cols_per, workers
    );

    pool.install(|| {
        grid.samples()
            .par_chunks(rows_per * w)
            .zip(sums.par_chunks_mut(rows_per * w))
            .for_each(|(src, dst)| prefix_rows(src, dst, w));

        column_blocks(&mut sums, w, cols_per)
            .into_par_iter()
            .for_each(prefix_columns);
    });

    Ok(SummedAreaTable::from_parts(w, h, sums))
}
