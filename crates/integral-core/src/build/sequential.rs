// crates/integral-core/src/build/sequential.rs

use crate::grid::Grid;
use crate::table::SummedAreaTable;

/// Single-pass row-major build.
///
/// Each cell is the running sum of its row plus the cell directly above it.
pub fn build_sequential(grid: &Grid) -> SummedAreaTable {
    let (w, h) = (grid.width(), grid.height());
    if grid.is_empty() {
        return SummedAreaTable::empty(w, h);
    }

    let mut sums = vec![0u64; w * h];
    for y in 0..h {
        let mut row_sum = 0u64;
        let base = y * w;
        for (x, &v) in grid.row(y).iter().enumerate() {
            row_sum += v as u64;
            let above = if y > 0 { sums[base - w + x] } else { 0 };
            sums[base + x] = row_sum + above;
        }
    }

    SummedAreaTable::from_parts(w, h, sums)
}
