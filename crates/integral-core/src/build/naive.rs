// crates/integral-core/src/build/naive.rs

use crate::grid::Grid;
use crate::table::SummedAreaTable;

/// Brute-force build: every cell resums its whole origin rectangle.
///
/// O(w*h*area). Oracle for small grids only.
pub fn build_naive(grid: &Grid) -> SummedAreaTable {
    let (w, h) = (grid.width(), grid.height());
    if grid.is_empty() {
        return SummedAreaTable::empty(w, h);
    }

    let mut sums = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let mut s = 0u64;
            for j in 0..=y {
                for i in 0..=x {
                    s += grid.get(i, j) as u64;
                }
            }
            sums.push(s);
        }
    }

    SummedAreaTable::from_parts(w, h, sums)
}
