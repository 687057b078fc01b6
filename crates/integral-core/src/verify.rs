// crates/integral-core/src/verify.rs

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::build::build_parallel_with;
use crate::build::sequential::build_sequential;
use crate::config::{BuildConfig, ParallelStrategy};
use crate::error::{Result, SatError};
use crate::grid::Grid;
use crate::query::{brute_force_rect_sum, rect_sum, Rect};
use crate::table::SummedAreaTable;

/// Exact element-wise comparison. A shape mismatch becomes a
/// `SatError::ShapeDivergence`, the first differing cell a
/// `SatError::Divergence`, both tagged with `backend`.
pub fn cross_validate(
    expected: &SummedAreaTable,
    actual: &SummedAreaTable,
    backend: &str,
) -> Result<()> {
    if expected.width() != actual.width() || expected.height() != actual.height() {
        return Err(SatError::ShapeDivergence {
            backend: backend.to_string(),
            expected_width: expected.width(),
            expected_height: expected.height(),
            actual_width: actual.width(),
            actual_height: actual.height(),
        });
    }

    let (e, a) = (expected.as_slice(), actual.as_slice());
    let width = expected.width();
    if e.len() != a.len() {
        let index = e.len().min(a.len());
        return Err(divergence(width, backend, index, e.get(index), a.get(index)));
    }
    match e.iter().zip(a.iter()).position(|(x, y)| x != y) {
        Some(index) => Err(divergence(width, backend, index, e.get(index), a.get(index))),
        None => Ok(()),
    }
}

fn divergence(
    width: usize,
    backend: &str,
    index: usize,
    expected: Option<&u64>,
    actual: Option<&u64>,
) -> SatError {
    let (x, y) = if width == 0 {
        (0, 0)
    } else {
        (index % width, index / width)
    };
    SatError::Divergence {
        backend: backend.to_string(),
        index,
        x,
        y,
        expected: expected.copied().unwrap_or(0),
        actual: actual.copied().unwrap_or(0),
    }
}

/// Build sequentially, then with every parallel strategy at `workers`, and
/// require all results to match. Returns the sequential table.
pub fn cross_validate_all(grid: &Grid, workers: usize) -> Result<SummedAreaTable> {
    let reference = build_sequential(grid);
    for strategy in ParallelStrategy::ALL {
        let got = build_parallel_with(grid, &BuildConfig::new(workers, strategy))?;
        cross_validate(&reference, &got, strategy.name())?;
        debug!("cross-validate ok: strategy={} workers={}", strategy, workers);
    }
    Ok(reference)
}

/// Structural checks on a table built from `grid`: same shape, rows and
/// columns non-decreasing, bottom-right cell equal to the grid total.
pub fn check_table(grid: &Grid, table: &SummedAreaTable) -> Result<()> {
    if table.width() != grid.width() || table.height() != grid.height() {
        return Err(SatError::Validation(format!(
            "table is {}x{}, grid is {}x{}",
            table.width(),
            table.height(),
            grid.width(),
            grid.height()
        )));
    }
    if grid.is_empty() {
        if !table.is_empty() {
            return Err(SatError::Validation("degenerate grid produced cells".into()));
        }
        return Ok(());
    }

    let (w, h) = (table.width(), table.height());
    for y in 0..h {
        for x in 0..w {
            let v = table.at(x, y);
            if x > 0 && table.at(x - 1, y) > v {
                return Err(SatError::Validation(format!(
                    "row {} decreases at x={}",
                    y, x
                )));
            }
            if y > 0 && table.at(x, y - 1) > v {
                return Err(SatError::Validation(format!(
                    "column {} decreases at y={}",
                    x, y
                )));
            }
        }
    }

    let total = grid.total();
    if table.total() != total {
        return Err(SatError::Validation(format!(
            "bottom-right cell {} != grid total {}",
            table.total(),
            total
        )));
    }
    Ok(())
}

/// Compare `count` seeded random rectangle queries against direct summation.
/// Returns how many rectangles were checked (0 for an empty grid).
pub fn check_random_rects(
    grid: &Grid,
    table: &SummedAreaTable,
    count: usize,
    seed: u64,
) -> Result<usize> {
    if grid.is_empty() {
        return Ok(0);
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let (w, h) = (grid.width(), grid.height());
    for _ in 0..count {
        let rect = Rect::from_corners(
            rng.gen_range(0..w),
            rng.gen_range(0..h),
            rng.gen_range(0..w),
            rng.gen_range(0..h),
        );
        let fast = rect_sum(table, rect)?;
        let slow = brute_force_rect_sum(grid, rect)?;
        if fast != slow {
            return Err(SatError::Validation(format!(
                "rect {:?}: table gives {}, direct sum is {}",
                rect, fast, slow
            )));
        }
    }
    Ok(count)
}
