// crates/integral-core/src/query.rs

use crate::error::Result;
use crate::grid::Grid;
use crate::table::SummedAreaTable;
use crate::validate::validate_rect;

/// Inclusive rectangle `(x0, y0)..=(x1, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Rect {
    pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle spanning two arbitrary corners, reordered so `x0 <= x1` and `y0 <= y1`.
    pub fn from_corners(xa: usize, ya: usize, xb: usize, yb: usize) -> Self {
        Self {
            x0: xa.min(xb),
            y0: ya.min(yb),
            x1: xa.max(xb),
            y1: ya.max(yb),
        }
    }

    pub fn area(&self) -> usize {
        (self.x1 - self.x0 + 1) * (self.y1 - self.y0 + 1)
    }
}

/// Sum of the grid samples inside `rect`, from four table lookups.
///
/// ```text
///   D | B        sum(rect) = A - B - C + D
///   --+---
///   C | A
/// ```
///
/// Evaluated with wrapping arithmetic: the corner values can be large enough
/// that `A + D` leaves u64 even though the rectangle sum fits, and the result
/// is exact modulo 2^64.
pub fn rect_sum(table: &SummedAreaTable, rect: Rect) -> Result<u64> {
    validate_rect(rect, table.width(), table.height())?;
    let Rect { x0, y0, x1, y1 } = rect;

    let a = table.at(x1, y1);
    let b = if y0 > 0 { table.at(x1, y0 - 1) } else { 0 };
    let c = if x0 > 0 { table.at(x0 - 1, y1) } else { 0 };
    let d = if x0 > 0 && y0 > 0 {
        table.at(x0 - 1, y0 - 1)
    } else {
        0
    };
    Ok(a.wrapping_sub(b).wrapping_sub(c).wrapping_add(d))
}

/// Direct summation over the grid. Reference for `rect_sum`.
pub fn brute_force_rect_sum(grid: &Grid, rect: Rect) -> Result<u64> {
    validate_rect(rect, grid.width(), grid.height())?;
    let mut s = 0u64;
    for y in rect.y0..=rect.y1 {
        s += grid.row(y)[rect.x0..=rect.x1]
            .iter()
            .map(|&v| v as u64)
            .sum::<u64>();
    }
    Ok(s)
}
