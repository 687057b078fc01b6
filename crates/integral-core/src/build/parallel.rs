// crates/integral-core/src/build/parallel.rs

use std::thread;

use log::debug;

use crate::build::partition::{block_len, clamp_workers, column_blocks};
use crate::build::phases::{prefix_columns, prefix_rows};
use crate::grid::Grid;
use crate::table::SummedAreaTable;

/// Two-phase fork-join build on scoped threads.
///
/// Phase 1 gives each worker `ceil(h/t)` contiguous rows and computes row
/// prefix sums. The end of the first scope joins every phase-1 worker; that is
/// the only barrier. Phase 2 gives each worker `ceil(w/t)` contiguous columns
/// and accumulates them top to bottom in place. Result is bit-identical to
/// `build_sequential` for every `workers` (0 is treated as 1).
pub fn build_parallel(grid: &Grid, workers: usize) -> SummedAreaTable {
    let (w, h) = (grid.width(), grid.height());
    if grid.is_empty() {
        return SummedAreaTable::empty(w, h);
    }
    let workers = clamp_workers(workers);

    let mut sums = vec![0u64; w * h];

    let rows_per = block_len(h, workers);
    debug!("parallel phase 1: {} rows, {} rows/worker, workers={}", h, rows_per, workers);
    thread::scope(|s| {
        let src_blocks = grid.samples().chunks(rows_per * w);
        for (src, dst) in src_blocks.zip(sums.chunks_mut(rows_per * w)) {
            s.spawn(move || prefix_rows(src, dst, w));
        }
    });

    let cols_per = block_len(w, workers);
    debug!("parallel phase 2: {} cols, {} cols/worker, workers={}", w, cols_per, workers);
    thread::scope(|s| {
        for block in column_blocks(&mut sums, w, cols_per) {
            s.spawn(move || prefix_columns(block));
        }
    });

    SummedAreaTable::from_parts(w, h, sums)
}
