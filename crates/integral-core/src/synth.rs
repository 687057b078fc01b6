// crates/integral-core/src/synth.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::Grid;

pub const DEFAULT_SEED: u64 = 1337;
pub const DEFAULT_MAX_SAMPLE: u32 = 255;

/// Reproducible grid with samples uniform in `0..=255`.
pub fn random_grid(width: usize, height: usize, seed: u64) -> Grid {
    random_grid_with_max(width, height, seed, DEFAULT_MAX_SAMPLE)
}

/// Reproducible grid with samples uniform in `0..=max`.
pub fn random_grid_with_max(width: usize, height: usize, seed: u64, max: u32) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    Grid::from_fn(width, height, |_, _| rng.gen_range(0..=max))
}
