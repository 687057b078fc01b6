// crates/integral-core/src/grid.rs

use crate::error::Result;
use crate::validate::validate_grid_len;

/// Immutable row-major grid of `width * height` samples.
///
/// A grid with `width == 0` or `height == 0` is valid and holds no samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    samples: Vec<u32>,
}

impl Grid {
    pub fn new(width: usize, height: usize, samples: Vec<u32>) -> Result<Self> {
        validate_grid_len(width, height, samples.len())?;
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every cell in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u32) -> Self {
        let mut samples = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            samples,
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
    pub fn samples(&self) -> &[u32] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.samples[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[u32] {
        let base = y * self.width;
        &self.samples[base..base + self.width]
    }

    /// Sum of every sample, accumulated in 64 bits.
    pub fn total(&self) -> u64 {
        self.samples.iter().map(|&v| v as u64).sum()
    }
}
