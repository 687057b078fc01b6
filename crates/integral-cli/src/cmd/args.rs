// crates/integral-cli/src/cmd/args.rs
//
// Flags shared by every subcommand. Dimension validation lives here: the
// core accepts zero-sized grids, the CLI does not.

use clap::{Args, ValueEnum};
use integral_core::config::default_workers;
use integral_core::synth::{random_grid, DEFAULT_SEED};
use integral_core::{Grid, ParallelStrategy};

#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Grid width in samples (must be > 0)
    #[arg(long, default_value_t = 2000, value_parser = parse_dim)]
    pub width: usize,

    /// Grid height in samples (must be > 0)
    #[arg(long, default_value_t = 1000, value_parser = parse_dim)]
    pub height: usize,

    /// Seed for the pseudo-random samples (uniform 0..=255)
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl GridArgs {
    pub fn grid(&self) -> Grid {
        random_grid(self.width, self.height, self.seed)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Scoped threads, one per block
    Threads,
    /// Rayon pool sized to --threads
    Rayon,
}

impl From<Strategy> for ParallelStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Threads => ParallelStrategy::Threads,
            Strategy::Rayon => ParallelStrategy::Rayon,
        }
    }
}

fn parse_dim(s: &str) -> Result<usize, String> {
    let v: usize = s.parse().map_err(|e| format!("{e}"))?;
    if v == 0 {
        return Err("width and height must be > 0".into());
    }
    Ok(v)
}

/// `--threads` as given: absent means hardware concurrency, non-positive means 1.
pub fn resolve_threads(threads: Option<i64>) -> usize {
    match threads {
        None => default_workers(),
        Some(t) if t < 1 => 1,
        Some(t) => t as usize,
    }
}
