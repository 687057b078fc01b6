// crates/integral-core/src/table.rs

use crate::error::Result;
use crate::query::{self, Rect};

/// Summed-area table: `at(x, y)` is the sum of every grid sample with
/// coordinates `<= (x, y)`.
///
/// Cells are `u64` regardless of grid size; a 32-bit accumulator overflows on
/// realistic inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummedAreaTable {
    width: usize,
    height: usize,
    sums: Vec<u64>,
}

impl SummedAreaTable {
    /// Wrap a fully populated buffer. Builders are the only callers.
    pub(crate) fn from_parts(width: usize, height: usize, sums: Vec<u64>) -> Self {
        debug_assert_eq!(sums.len(), width * height);
        Self {
            width,
            height,
            sums,
        }
    }

    pub(crate) fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            sums: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.sums
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.sums
    }

    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> u64 {
        self.sums[y * self.width + x]
    }

    /// Bottom-right cell, i.e. the sum of the whole grid. Zero when empty.
    pub fn total(&self) -> u64 {
        self.sums.last().copied().unwrap_or(0)
    }

    pub fn rect_sum(&self, rect: Rect) -> Result<u64> {
        query::rect_sum(self, rect)
    }
}
